//! Markdown specification generator.
//!
//! The document is written for an AI coding assistant: terse, literal values,
//! and a fixed set of `##` sections so it can be split back into a section
//! map (see [`super::json::parse_sections`]).

use super::tokens::{modal_description, nav_description, px, DerivedTokens};
use crate::models::{ButtonStyle, CardStyle};
use std::fmt::Write as _;

/// Section headings, in document order.
pub const SECTION_HEADINGS: [&str; 5] = [
    "Critical Requirements",
    "Design Tokens",
    "Components",
    "Page Structure",
    "Do Not",
];

/// Generates the complete markdown document.
///
/// # Example
///
/// ```
/// use stylespec::catalog::Catalog;
/// use stylespec::compiler::markdown::generate_markdown;
/// use stylespec::compiler::tokens::DerivedTokens;
/// use stylespec::models::ExportState;
///
/// let catalog = Catalog::load().unwrap();
/// let tokens = DerivedTokens::derive(&ExportState::default(), &catalog);
/// let markdown = generate_markdown(&tokens);
/// assert!(markdown.contains("## Critical Requirements"));
/// ```
#[must_use]
pub fn generate_markdown(tokens: &DerivedTokens) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "# {} ({}) Design Specification\n",
        tokens.template_name, tokens.style_name
    );
    let _ = writeln!(output, "> Project: `{}`\n", tokens.project_name);
    let _ = writeln!(
        output,
        "You are implementing the {} using the exact design system below. \
         Every value is literal. Do not approximate, substitute or \"improve\" any of them.\n",
        tokens.template_name.to_lowercase()
    );

    output.push_str(&critical_requirements(tokens));
    output.push_str(&design_tokens(tokens));
    output.push_str(&components(tokens));
    output.push_str(&page_structure(tokens));
    output.push_str(&do_not(tokens));

    output
}

fn critical_requirements(tokens: &DerivedTokens) -> String {
    let mut output = String::new();
    output.push_str("## Critical Requirements\n\n");

    let _ = writeln!(
        output,
        "1. **Primary color** is `{}` (hover `{}`). Use it for primary actions, links and focus rings.",
        tokens.primary, tokens.primary_hover
    );
    let _ = writeln!(
        output,
        "2. **Font family** is `{}` for all text, loaded with the stack `{}`.",
        tokens.font_family, tokens.font_stack
    );
    let shape = match tokens.button_style {
        ButtonStyle::Sharp => " (square corners)",
        ButtonStyle::Rounded => "",
        ButtonStyle::Pill => " (fully rounded)",
    };
    let _ = writeln!(
        output,
        "3. **Corner radius** for buttons and inputs is `{}`{}.",
        tokens.radius, shape
    );
    let _ = writeln!(
        output,
        "4. **Spacing base unit** is `{}px`. Every margin, padding and gap comes from the spacing scale.",
        tokens.spacing_unit
    );
    let _ = writeln!(
        output,
        "5. **Transitions** last `{}ms` with `{}` on every interactive element.",
        tokens.duration_ms, tokens.easing
    );
    output.push('\n');
    output
}

fn design_tokens(tokens: &DerivedTokens) -> String {
    let mut output = String::new();
    output.push_str("## Design Tokens\n\n");

    output.push_str("### Colors\n\n");
    output.push_str("| Token | Value | Usage |\n");
    output.push_str("|-------|-------|-------|\n");
    let surface = &tokens.surface;
    let rows = [
        ("primary", tokens.primary.as_str(), "Primary actions, links, focus rings"),
        ("primary-hover", tokens.primary_hover.as_str(), "Hover state of primary actions"),
        ("on-primary", tokens.on_primary.as_str(), "Text on primary surfaces"),
        ("secondary", tokens.secondary.as_str(), "Secondary actions, supporting UI"),
        ("accent", tokens.accent.as_str(), "Highlights and badges"),
        ("background", surface.background.as_str(), "Page background"),
        ("foreground", surface.foreground.as_str(), "Body text"),
        ("muted", surface.muted.as_str(), "Subtle surfaces"),
        ("border", surface.border.as_str(), "Dividers and outlines"),
        ("card", surface.card.as_str(), "Card surfaces"),
    ];
    for (name, value, usage) in rows {
        let _ = writeln!(output, "| {name} | `{value}` | {usage} |");
    }
    output.push('\n');

    output.push_str("### Typography\n\n");
    output.push_str("| Token | Value |\n");
    output.push_str("|-------|-------|\n");
    let _ = writeln!(output, "| font-family | `{}` |", tokens.font_stack);
    output.push_str("| body-size | `16px` |\n");
    output.push_str("| line-height | `1.5` |\n");
    output.push_str("| heading-weight | `700` |\n");
    output.push_str("| body-weight | `400` |\n");
    output.push('\n');

    output.push_str("### Spacing\n\n");
    let _ = writeln!(
        output,
        "Density: **{}**, base unit `{}px`.\n",
        tokens.density.label(),
        tokens.spacing_unit
    );
    output.push_str("| Token | Value |\n");
    output.push_str("|-------|-------|\n");
    for (index, value) in tokens.spacing_scale.iter().enumerate() {
        let _ = writeln!(output, "| space-{} | `{}` |", index + 1, px(*value));
    }
    output.push('\n');

    output.push_str("### Shape & Motion\n\n");
    output.push_str("| Token | Value |\n");
    output.push_str("|-------|-------|\n");
    let _ = writeln!(output, "| radius | `{}` |", tokens.radius);
    let _ = writeln!(output, "| card-radius | `{}` |", tokens.card_radius);
    let _ = writeln!(output, "| shadow | `{}` |", tokens.card.shadow);
    let _ = writeln!(output, "| motion-duration | `{}ms` |", tokens.duration_ms);
    let _ = writeln!(output, "| motion-easing | `{}` |", tokens.easing);
    let _ = writeln!(output, "| mood | {} |", tokens.mood.label());
    output.push('\n');

    output
}

fn components(tokens: &DerivedTokens) -> String {
    let unit = tokens.spacing_unit;
    let transition = format!("{}ms {}", tokens.duration_ms, tokens.easing);
    let mut output = String::new();
    output.push_str("## Components\n\n");

    let _ = writeln!(
        output,
        "### Primary Button ({})\n",
        tokens.button_style.label()
    );
    output.push_str("```css\n.btn-primary {\n");
    let _ = writeln!(output, "  background: {};", tokens.primary);
    let _ = writeln!(output, "  color: {};", tokens.on_primary);
    output.push_str("  border: none;\n");
    let _ = writeln!(output, "  border-radius: {};", tokens.radius);
    let _ = writeln!(output, "  padding: {}px {}px;", unit, unit * 2);
    let _ = writeln!(output, "  font-family: {};", tokens.font_stack);
    output.push_str("  font-weight: 600;\n");
    let _ = writeln!(output, "  transition: background-color {transition};");
    output.push_str("}\n.btn-primary:hover {\n");
    let _ = writeln!(output, "  background: {};", tokens.primary_hover);
    output.push_str("}\n```\n\n");

    output.push_str("### Secondary Button\n\n");
    output.push_str("```css\n.btn-secondary {\n");
    output.push_str("  background: transparent;\n");
    let _ = writeln!(output, "  color: {};", tokens.primary);
    let _ = writeln!(output, "  border: 1px solid {};", tokens.primary);
    let _ = writeln!(output, "  border-radius: {};", tokens.radius);
    let _ = writeln!(output, "  padding: {}px {}px;", unit, unit * 2);
    let _ = writeln!(output, "  transition: all {transition};");
    output.push_str("}\n```\n\n");

    let _ = writeln!(output, "### Card ({})\n", tokens.card_style.label());
    output.push_str("```css\n.card {\n");
    let _ = writeln!(output, "  background: {};", tokens.surface.card);
    let _ = writeln!(output, "  border: {};", tokens.card.border);
    let _ = writeln!(output, "  border-radius: {};", tokens.card_radius);
    let _ = writeln!(output, "  box-shadow: {};", tokens.card.shadow);
    let _ = writeln!(output, "  padding: {}px;", unit * 3);
    output.push_str("}\n```\n\n");

    let _ = writeln!(output, "### Input ({})\n", tokens.input_style.label());
    output.push_str("```css\n.input {\n");
    let _ = writeln!(output, "  background: {};", tokens.input.background);
    let _ = writeln!(output, "  border: {};", tokens.input.border);
    if let Some(bottom) = &tokens.input.border_bottom {
        let _ = writeln!(output, "  border-bottom: {bottom};");
    }
    let _ = writeln!(output, "  border-radius: {};", tokens.input.radius);
    let _ = writeln!(output, "  padding: {}px {}px;", unit, unit + unit / 2);
    let _ = writeln!(output, "  color: {};", tokens.surface.foreground);
    let _ = writeln!(output, "  transition: border-color {transition};");
    output.push_str("}\n.input:focus {\n");
    let _ = writeln!(output, "  outline: 2px solid {};", tokens.primary);
    output.push_str("  outline-offset: 2px;\n");
    output.push_str("}\n```\n\n");

    let _ = writeln!(
        output,
        "### Navigation ({})\n\n{}.\n",
        tokens.nav_style.label(),
        nav_description(tokens.nav_style)
    );
    let _ = writeln!(
        output,
        "### Modal ({})\n\n{}.\n",
        tokens.modal_style.label(),
        modal_description(tokens.modal_style)
    );

    output
}

fn page_structure(tokens: &DerivedTokens) -> String {
    let mut output = String::new();
    output.push_str("## Page Structure\n\n");
    let _ = writeln!(
        output,
        "Build the {} in this exact order, top to bottom:\n",
        tokens.template_name
    );

    for (index, (name, description)) in tokens.page_sections.iter().enumerate() {
        let _ = writeln!(output, "{}. **{}** - {}", index + 1, name, description);
    }
    output.push('\n');
    output
}

fn do_not(tokens: &DerivedTokens) -> String {
    let mut output = String::new();
    output.push_str("## Do Not\n\n");

    output.push_str("- Do not introduce colors that are not in the color token table.\n");
    let _ = writeln!(
        output,
        "- Do not use any font family other than `{}`.",
        tokens.font_family
    );
    match tokens.button_style {
        ButtonStyle::Sharp => {
            output.push_str("- Do not round any corners on buttons or inputs.\n");
        }
        ButtonStyle::Rounded | ButtonStyle::Pill => {
            let _ = writeln!(
                output,
                "- Do not use a corner radius other than `{}` on buttons and inputs.",
                tokens.radius
            );
        }
    }
    let _ = writeln!(
        output,
        "- Do not use spacing values outside the scale built on `{}px`.",
        tokens.spacing_unit
    );
    let _ = writeln!(
        output,
        "- Do not use transition durations other than `{}ms`.",
        tokens.duration_ms
    );
    if tokens.card_style != CardStyle::Elevated {
        output.push_str("- Do not add drop shadows to cards.\n");
    }
    output.push_str("- Do not add gradients or decorative effects that are not specified.\n");
    output.push_str("- Do not reorder, merge or skip sections of the page structure.\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{ExportState, InputStyle};

    fn markdown_for(state: &ExportState) -> String {
        let catalog = Catalog::load().unwrap();
        generate_markdown(&DerivedTokens::derive(state, &catalog))
    }

    #[test]
    fn test_headings_appear_in_order() {
        let markdown = markdown_for(&ExportState::with_name("calm-otter"));

        let positions: Vec<usize> = SECTION_HEADINGS
            .iter()
            .map(|heading| {
                markdown
                    .find(&format!("\n## {heading}\n"))
                    .unwrap_or_else(|| panic!("missing heading {heading}"))
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(markdown.matches("\n## ").count(), SECTION_HEADINGS.len());
    }

    #[test]
    fn test_title_names_template_and_style() {
        let mut state = ExportState::with_name("calm-otter");
        state.template_id = "dashboard".to_string();
        state.style_id = "swiss".to_string();

        let markdown = markdown_for(&state);
        assert!(markdown.starts_with("# Analytics Dashboard (Swiss) Design Specification\n"));
        assert!(markdown.contains("`calm-otter`"));
    }

    #[test]
    fn test_pill_buttons_are_fully_rounded() {
        let mut state = ExportState::with_name("calm-otter");
        state.button_style = ButtonStyle::Pill;

        let markdown = markdown_for(&state);
        assert!(markdown.contains("is `9999px` (fully rounded)"));
        assert!(markdown.contains("border-radius: 9999px;"));
    }

    #[test]
    fn test_sharp_buttons_forbid_rounding() {
        let mut state = ExportState::with_name("calm-otter");
        state.button_style = ButtonStyle::Sharp;

        let markdown = markdown_for(&state);
        assert!(markdown.contains("- Do not round any corners on buttons or inputs."));
    }

    #[test]
    fn test_underlined_input_snippet() {
        let mut state = ExportState::with_name("calm-otter");
        state.input_style = InputStyle::Underlined;

        let markdown = markdown_for(&state);
        assert!(markdown.contains("### Input (Underlined)"));
        assert!(markdown.contains("  border-bottom: 1px solid"));
    }

    #[test]
    fn test_page_structure_lists_template_sections() {
        let catalog = Catalog::load().unwrap();
        let mut state = ExportState::with_name("calm-otter");
        state.template_id = "blog".to_string();

        let markdown = markdown_for(&state);
        for section in &catalog.template("blog").sections {
            assert!(markdown.contains(&format!("**{}**", section.name)));
        }
    }

    #[test]
    fn test_dashboard_outline_has_hero_features_and_cta() {
        let mut state = ExportState::with_name("calm-otter");
        state.template_id = "dashboard".to_string();

        let markdown = markdown_for(&state);
        let positions: Vec<usize> = ["**Hero**", "**Features**", "**Call to Action**"]
            .iter()
            .map(|block| markdown.find(block).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_multiline_font_cannot_add_headings() {
        let mut state = ExportState::with_name("calm-otter\n## Extra");
        state.font = "Inter\n## Injected\n".to_string();

        let markdown = markdown_for(&state);
        let sections = crate::compiler::json::parse_sections(&markdown);
        assert_eq!(sections.len(), SECTION_HEADINGS.len());
        assert!(markdown.contains("`Inter ## Injected`"));
        assert!(markdown.contains("`calm-otter ## Extra`"));
        assert!(!markdown.contains("\n## Injected"));
    }

    #[test]
    fn test_flat_cards_have_no_shadow_rule() {
        let mut state = ExportState::with_name("calm-otter");
        state.card_style = CardStyle::Flat;

        let markdown = markdown_for(&state);
        assert!(markdown.contains("- Do not add drop shadows to cards."));
        assert!(markdown.contains("  box-shadow: none;"));
    }
}
