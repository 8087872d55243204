//! CSS custom-property generator.

use super::tokens::{px, DerivedTokens};
use std::fmt::Write as _;

/// Generates a `:root` block of custom properties.
#[must_use]
pub fn generate_css(tokens: &DerivedTokens) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "/* {}: {} ({}) */",
        tokens.project_name.replace("*/", "* /"),
        tokens.template_name,
        tokens.style_name
    );
    output.push_str(":root {\n");

    let vars = [
        ("color-primary", tokens.primary.clone()),
        ("color-primary-hover", tokens.primary_hover.clone()),
        ("color-secondary", tokens.secondary.clone()),
        ("color-accent", tokens.accent.clone()),
        ("font-family", tokens.font_stack.clone()),
        ("radius", tokens.radius.to_string()),
        ("shadow-intensity", tokens.shadow_label.to_string()),
        ("spacing-unit", format!("{}px", tokens.spacing_unit)),
        ("motion-duration", format!("{}ms", tokens.duration_ms)),
        ("motion-easing", tokens.easing.to_string()),
    ];
    for (name, value) in vars {
        let _ = writeln!(output, "  --{name}: {value};");
    }
    for (index, value) in tokens.spacing_scale.iter().enumerate() {
        let _ = writeln!(output, "  --space-{}: {};", index + 1, px(*value));
    }

    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{CardStyle, Density, ExportState, Mood};

    fn css_for(state: &ExportState) -> String {
        let catalog = Catalog::load().unwrap();
        generate_css(&DerivedTokens::derive(state, &catalog))
    }

    #[test]
    fn test_spacing_unit_follows_density() {
        let mut state = ExportState::with_name("calm-otter");

        state.density = Density::Compact;
        assert!(css_for(&state).contains("--spacing-unit: 4px;"));

        state.density = Density::Spacious;
        let css = css_for(&state);
        assert!(css.contains("--spacing-unit: 12px;"));
        assert!(css.contains("--space-1: 6px;"));
        assert!(css.contains("--space-10: 192px;"));
    }

    #[test]
    fn test_motion_variables() {
        let mut state = ExportState::with_name("calm-otter");
        state.mood = Mood::Serious;

        let css = css_for(&state);
        assert!(css.contains("--motion-duration: 150ms;"));
        assert!(css.contains("--motion-easing: cubic-bezier(0.4, 0, 0.2, 1);"));
    }

    #[test]
    fn test_shadow_intensity_tracks_card_style() {
        let mut state = ExportState::with_name("calm-otter");

        state.card_style = CardStyle::Elevated;
        assert!(css_for(&state).contains("--shadow-intensity: medium;"));

        state.card_style = CardStyle::Bordered;
        assert!(css_for(&state).contains("--shadow-intensity: none;"));
    }

    #[test]
    fn test_project_name_cannot_close_header_comment() {
        let css = css_for(&ExportState::with_name("evil */ body {"));
        assert_eq!(css.matches("*/").count(), 1);
        assert!(css.lines().next().unwrap().ends_with(") */"));
    }

    #[test]
    fn test_variable_order() {
        let css = css_for(&ExportState::with_name("calm-otter"));
        let names: Vec<&str> = css
            .lines()
            .filter_map(|line| line.trim().strip_prefix("--"))
            .filter_map(|line| line.split(':').next())
            .collect();

        assert_eq!(&names[..3], ["color-primary", "color-primary-hover", "color-secondary"]);
        assert_eq!(names.len(), 20);
        assert_eq!(names[19], "space-10");
    }
}
