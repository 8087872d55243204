//! Derived design values shared by every output format.
//!
//! Each emitter reads from one [`DerivedTokens`] so Markdown, JSON and CSS
//! can never disagree about a color, radius or timing.

use crate::catalog::{Catalog, PreviewColors};
use crate::models::{
    ButtonStyle, CardStyle, ColorTriad, Density, ExportState, InputStyle, ModalStyle, Mood,
    NavStyle, RgbColor,
};
use tracing::debug;

/// Percentage used for the primary hover shade.
pub const HOVER_DARKEN_PERCENT: f64 = 10.0;

/// Multipliers applied to the spacing base unit.
pub const SPACING_RATIOS: [f64; 10] = [0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 6.0, 8.0, 12.0, 16.0];

/// Spacing base unit in px.
#[must_use]
pub const fn spacing_unit(density: Density) -> u32 {
    match density {
        Density::Compact => 4,
        Density::Balanced => 8,
        Density::Spacious => 12,
    }
}

/// Spacing scale in px, one entry per ratio.
#[must_use]
pub fn spacing_scale(density: Density) -> Vec<f64> {
    let unit = f64::from(spacing_unit(density));
    SPACING_RATIOS.iter().map(|ratio| unit * ratio).collect()
}

/// Transition duration in ms for every interactive element.
#[must_use]
pub const fn transition_ms(mood: Mood) -> u32 {
    match mood {
        Mood::Serious => 150,
        Mood::Neutral => 200,
        Mood::Friendly => 300,
    }
}

/// Transition timing function.
#[must_use]
pub const fn easing(mood: Mood) -> &'static str {
    match mood {
        Mood::Serious => "cubic-bezier(0.4, 0, 0.2, 1)",
        Mood::Neutral => "ease-in-out",
        Mood::Friendly => "cubic-bezier(0.34, 1.56, 0.64, 1)",
    }
}

/// Corner radius for buttons and inputs.
#[must_use]
pub const fn button_radius(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Sharp => "0px",
        ButtonStyle::Rounded => "8px",
        ButtonStyle::Pill => "9999px",
    }
}

/// Corner radius for cards. Pill buttons pair with soft, not circular, cards.
#[must_use]
pub const fn card_radius(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Sharp => "0px",
        ButtonStyle::Rounded => "12px",
        ButtonStyle::Pill => "24px",
    }
}

/// Shadow intensity label exported to CSS.
#[must_use]
pub const fn shadow_label(style: CardStyle) -> &'static str {
    match style {
        CardStyle::Elevated => "medium",
        CardStyle::Bordered | CardStyle::Flat => "none",
    }
}

/// Card surface treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTreatment {
    /// `box-shadow` value
    pub shadow: String,
    /// `border` value
    pub border: String,
}

/// Derives the card shadow and border.
#[must_use]
pub fn card_treatment(style: CardStyle, border_color: &str) -> CardTreatment {
    match style {
        CardStyle::Elevated => CardTreatment {
            shadow: "0 4px 12px rgba(0, 0, 0, 0.08)".to_string(),
            border: "none".to_string(),
        },
        CardStyle::Bordered => CardTreatment {
            shadow: "none".to_string(),
            border: format!("1px solid {border_color}"),
        },
        CardStyle::Flat => CardTreatment {
            shadow: "none".to_string(),
            border: "none".to_string(),
        },
    }
}

/// Text input treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTreatment {
    /// `border` value
    pub border: String,
    /// `border-bottom` value, only set when it differs from `border`
    pub border_bottom: Option<String>,
    /// `background` value
    pub background: String,
    /// `border-radius` value
    pub radius: String,
}

/// Derives the input border, background and radius.
#[must_use]
pub fn input_treatment(
    style: InputStyle,
    button: ButtonStyle,
    border_color: &str,
    muted: &str,
) -> InputTreatment {
    match style {
        InputStyle::Outlined => InputTreatment {
            border: format!("1px solid {border_color}"),
            border_bottom: None,
            background: "transparent".to_string(),
            radius: button_radius(button).to_string(),
        },
        InputStyle::Filled => InputTreatment {
            border: "none".to_string(),
            border_bottom: None,
            background: muted.to_string(),
            radius: button_radius(button).to_string(),
        },
        InputStyle::Underlined => InputTreatment {
            border: "none".to_string(),
            border_bottom: Some(format!("1px solid {border_color}")),
            background: "transparent".to_string(),
            radius: "0px".to_string(),
        },
    }
}

/// How the navigation bar is drawn.
#[must_use]
pub const fn nav_description(style: NavStyle) -> &'static str {
    match style {
        NavStyle::Minimal => "Transparent bar on the page background, no border, no shadow",
        NavStyle::Bordered => "Solid bar with a 1px bottom border in the border color",
        NavStyle::Floating => {
            "Detached bar inset from the viewport edges, card background, card radius and shadow"
        }
    }
}

/// How modals are presented.
#[must_use]
pub const fn modal_description(style: ModalStyle) -> &'static str {
    match style {
        ModalStyle::Centered => "Centered dialog, max width 480px, over a 50% black scrim",
        ModalStyle::Sheet => "Sheet sliding in from the right edge (bottom edge on mobile)",
        ModalStyle::Fullscreen => "Full viewport takeover with a close button top right",
    }
}

/// CSS font stack for a family name.
#[must_use]
pub fn font_stack(family: &str) -> String {
    let lower = family.to_ascii_lowercase();
    let serif = lower.contains("playfair") || (lower.contains("serif") && !lower.contains("sans"));
    let fallback = if serif {
        "Georgia, serif"
    } else {
        "system-ui, sans-serif"
    };
    format!("'{family}', {fallback}")
}

/// Collapses every run of whitespace, line breaks included, into one space.
#[must_use]
pub fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Free-form font name reduced to one line that is safe inside a quoted CSS
/// string and a markdown table cell.
#[must_use]
pub fn font_name(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\\' | ';' | '{' | '}' | '|'))
        .collect();
    single_line(&kept)
}

/// Formats px values without a trailing `.0`.
#[must_use]
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}px")
    } else {
        format!("{value}px")
    }
}

/// Every value the emitters need, computed once from an export state.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTokens {
    /// Project name
    pub project_name: String,
    /// Template display name
    pub template_name: String,
    /// Style display name
    pub style_name: String,
    /// Page outline from the template (name, description)
    pub page_sections: Vec<(String, String)>,
    /// Brand color
    pub primary: String,
    /// Brand color darkened for hover
    pub primary_hover: String,
    /// Text color on the brand color
    pub on_primary: String,
    /// Supporting color
    pub secondary: String,
    /// Highlight color
    pub accent: String,
    /// Preview colors of the style preset
    pub surface: PreviewColors,
    /// Font family name
    pub font_family: String,
    /// CSS font stack
    pub font_stack: String,
    /// Density
    pub density: Density,
    /// Spacing base unit in px
    pub spacing_unit: u32,
    /// Spacing scale in px
    pub spacing_scale: Vec<f64>,
    /// Mood
    pub mood: Mood,
    /// Transition duration in ms
    pub duration_ms: u32,
    /// Transition timing function
    pub easing: &'static str,
    /// Button style
    pub button_style: ButtonStyle,
    /// Button and input radius
    pub radius: &'static str,
    /// Card radius
    pub card_radius: &'static str,
    /// Card style
    pub card_style: CardStyle,
    /// Card shadow and border
    pub card: CardTreatment,
    /// Shadow intensity label
    pub shadow_label: &'static str,
    /// Input style
    pub input_style: InputStyle,
    /// Input border, background and radius
    pub input: InputTreatment,
    /// Navigation style
    pub nav_style: NavStyle,
    /// Modal style
    pub modal_style: ModalStyle,
}

impl DerivedTokens {
    /// Derives all values. Unknown template/style ids and unparseable colors
    /// fall back to catalog defaults.
    #[must_use]
    pub fn derive(state: &ExportState, catalog: &Catalog) -> Self {
        let template = catalog.template(&state.template_id);
        let style = catalog.style(&state.style_id);
        let defaults = catalog.default_colors();

        let primary = parse_or_default(&state.colors.primary, &defaults.primary);
        let secondary = parse_or_default(&state.colors.secondary, &defaults.secondary);
        let accent = parse_or_default(&state.colors.accent, &defaults.accent);

        let font_family = font_name(&state.font);
        let font_family = if font_family.is_empty() {
            debug!("Empty font family, using '{}'", catalog.fonts()[0]);
            catalog.fonts()[0].clone()
        } else {
            font_family
        };

        let surface = style.preview.clone();
        let card = card_treatment(state.card_style, &surface.border);
        let input = input_treatment(
            state.input_style,
            state.button_style,
            &surface.border,
            &surface.muted,
        );

        Self {
            project_name: single_line(&state.project_name),
            template_name: template.name.clone(),
            style_name: style.name.clone(),
            page_sections: template
                .sections
                .iter()
                .map(|section| (section.name.clone(), section.description.clone()))
                .collect(),
            primary: primary.to_hex(),
            primary_hover: primary.darken(HOVER_DARKEN_PERCENT).to_hex(),
            on_primary: if primary.is_light() {
                "#111111".to_string()
            } else {
                "#ffffff".to_string()
            },
            secondary: secondary.to_hex(),
            accent: accent.to_hex(),
            font_stack: font_stack(&font_family),
            font_family,
            density: state.density,
            spacing_unit: spacing_unit(state.density),
            spacing_scale: spacing_scale(state.density),
            mood: state.mood,
            duration_ms: transition_ms(state.mood),
            easing: easing(state.mood),
            button_style: state.button_style,
            radius: button_radius(state.button_style),
            card_radius: card_radius(state.button_style),
            card_style: state.card_style,
            card,
            shadow_label: shadow_label(state.card_style),
            input_style: state.input_style,
            input,
            nav_style: state.nav_style,
            modal_style: state.modal_style,
            surface,
        }
    }

    /// Colors as a triad, after fallbacks.
    #[must_use]
    pub fn triad(&self) -> ColorTriad {
        ColorTriad::new(&self.primary, &self.secondary, &self.accent)
    }
}

fn parse_or_default(hex: &str, fallback: &str) -> RgbColor {
    RgbColor::from_hex(hex).unwrap_or_else(|_| {
        debug!("Invalid color '{}', using '{}'", hex, fallback);
        RgbColor::from_hex(fallback).unwrap_or_default()
    })
}
