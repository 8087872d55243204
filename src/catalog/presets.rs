//! Catalog entry types: style presets, page templates and curated sets.

use crate::models::{
    ButtonStyle, CardStyle, ColorTriad, Density, InputStyle, ModalStyle, Mood, NavStyle,
    PartialDesignConfig,
};
use serde::{Deserialize, Serialize};

/// Semantic colors used to tint live previews of a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewColors {
    /// Page background
    pub background: String,
    /// Body text
    pub foreground: String,
    /// Accent / highlight
    pub accent: String,
    /// Muted surfaces
    pub muted: String,
    /// Hairlines and dividers
    pub border: String,
    /// Card surface
    pub card: String,
}

/// A named style preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Stable identifier (e.g., "swiss")
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Design configuration values this preset supplies
    #[serde(default)]
    pub defaults: PartialDesignConfig,
    /// Preview colors
    pub preview: PreviewColors,
}

/// One block of a template's page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSection {
    /// Section name (e.g., "Hero")
    pub name: String,
    /// What the section contains
    pub description: String,
}

/// A page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Stable identifier (e.g., "saas-landing")
    pub id: String,
    /// Display name
    pub name: String,
    /// Page outline, top to bottom
    pub sections: Vec<TemplateSection>,
}

/// A fully specified bundle of every randomizable export field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedSet {
    /// Stable identifier (e.g., "bold-statement")
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Primary, secondary and accent colors
    pub colors: ColorTriad,
    /// Font family
    pub font: String,
    /// Spacing density
    pub density: Density,
    /// Mood
    pub mood: Mood,
    /// Button style
    pub button_style: ButtonStyle,
    /// Card style
    pub card_style: CardStyle,
    /// Input style
    pub input_style: InputStyle,
    /// Navigation style
    pub nav_style: NavStyle,
    /// Modal style
    pub modal_style: ModalStyle,
}
