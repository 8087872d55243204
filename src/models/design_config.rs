//! Design configuration: the nine token sections edited in the Studio.
//!
//! [`DesignConfig`] is always complete. Presets and persisted configurations
//! are [`PartialDesignConfig`]s, where every section and every leaf is
//! optional; they are overlaid onto a complete configuration field by field.

use crate::models::tokens::{
    ButtonStyle, CardStyle, ContainerWidth, Density, Easing, IconSize, IconStyle, MotionDuration,
    Radius, ShadowIntensity, TypeScale,
};
use serde::{Deserialize, Serialize};

/// Default brand color for a fresh configuration.
pub const DEFAULT_PRIMARY: &str = "#2563eb";
/// Default font family for a fresh configuration.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Copies every `Some` leaf of a partial section onto a complete section.
macro_rules! overlay_fields {
    ($target:expr, $partial:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$partial.$field {
                $target.$field = value.clone();
            }
        )+
    };
}

/// Color section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorTokens {
    /// Brand color
    pub primary: String,
    /// Highlight color
    pub accent: String,
    /// Page background
    pub background: String,
    /// Body text
    pub foreground: String,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#0f172a".to_string(),
        }
    }
}

/// Typography section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyTokens {
    /// Font family name from the curated font list
    pub font_family: String,
    /// Type scale class
    pub scale: TypeScale,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            scale: TypeScale::default(),
        }
    }
}

/// Spacing section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingTokens {
    /// Density scale
    pub density: Density,
}

/// Border section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderTokens {
    /// Corner-radius class
    pub radius: Radius,
}

/// Shadow section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowTokens {
    /// Intensity class
    pub intensity: ShadowIntensity,
}

/// Layout section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutTokens {
    /// Container width class
    pub container: ContainerWidth,
}

/// Component section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentTokens {
    /// Button shape
    pub button_style: ButtonStyle,
    /// Card surface treatment
    pub card_style: CardStyle,
}

/// Icon section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconTokens {
    /// Drawing style
    pub style: IconStyle,
    /// Size class
    pub size: IconSize,
}

/// Motion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionTokens {
    /// Whether transitions are animated at all
    pub enabled: bool,
    /// Duration class
    pub duration: MotionDuration,
    /// Easing class
    pub easing: Easing,
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: MotionDuration::default(),
            easing: Easing::default(),
        }
    }
}

/// A complete design configuration.
///
/// Missing sections in serialized input are filled from [`Default`], so a
/// deserialized value is never partially undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignConfig {
    /// Colors
    pub colors: ColorTokens,
    /// Typography
    pub typography: TypographyTokens,
    /// Spacing
    pub spacing: SpacingTokens,
    /// Borders
    pub borders: BorderTokens,
    /// Shadows
    pub shadows: ShadowTokens,
    /// Layout
    pub layout: LayoutTokens,
    /// Components
    pub components: ComponentTokens,
    /// Icons
    pub icons: IconTokens,
    /// Motion
    pub motion: MotionTokens,
}

impl DesignConfig {
    /// Overlays every field present in `partial` onto this configuration.
    ///
    /// Fields are merged independently, so overriding one leaf of a section
    /// leaves its siblings untouched.
    pub fn overlay(&mut self, partial: &PartialDesignConfig) {
        if let Some(colors) = &partial.colors {
            overlay_fields!(self.colors, colors; primary, accent, background, foreground);
        }
        if let Some(typography) = &partial.typography {
            overlay_fields!(self.typography, typography; font_family, scale);
        }
        if let Some(spacing) = &partial.spacing {
            overlay_fields!(self.spacing, spacing; density);
        }
        if let Some(borders) = &partial.borders {
            overlay_fields!(self.borders, borders; radius);
        }
        if let Some(shadows) = &partial.shadows {
            overlay_fields!(self.shadows, shadows; intensity);
        }
        if let Some(layout) = &partial.layout {
            overlay_fields!(self.layout, layout; container);
        }
        if let Some(components) = &partial.components {
            overlay_fields!(self.components, components; button_style, card_style);
        }
        if let Some(icons) = &partial.icons {
            overlay_fields!(self.icons, icons; style, size);
        }
        if let Some(motion) = &partial.motion {
            overlay_fields!(self.motion, motion; enabled, duration, easing);
        }
    }

    /// Returns a copy with `partial` overlaid.
    #[must_use]
    pub fn with_overlay(&self, partial: &PartialDesignConfig) -> Self {
        let mut merged = self.clone();
        merged.overlay(partial);
        merged
    }
}

/// Partial color section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

/// Partial typography section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<TypeScale>,
}

/// Partial spacing section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
}

/// Partial border section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialBorders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Radius>,
}

/// Partial shadow section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialShadows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<ShadowIntensity>,
}

/// Partial layout section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerWidth>,
}

/// Partial component section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialComponents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_style: Option<CardStyle>,
}

/// Partial icon section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialIcons {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<IconStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<IconSize>,
}

/// Partial motion section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialMotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<MotionDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

/// A design configuration where every section and leaf is optional.
///
/// Used for style preset defaults and for configurations loaded from
/// persistence, which may predate newer sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct PartialDesignConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<PartialBorders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<PartialShadows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PartialLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<PartialComponents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<PartialIcons>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<PartialMotion>,
}

impl PartialDesignConfig {
    /// Returns true when no section is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets the radius leaf, creating the section if needed.
    #[must_use]
    pub fn radius(mut self, radius: Radius) -> Self {
        self.borders.get_or_insert_with(Default::default).radius = Some(radius);
        self
    }

    /// Sets the primary color leaf, creating the section if needed.
    #[must_use]
    pub fn primary(mut self, primary: impl Into<String>) -> Self {
        self.colors.get_or_insert_with(Default::default).primary = Some(primary.into());
        self
    }

    /// Sets the font family leaf, creating the section if needed.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.typography
            .get_or_insert_with(Default::default)
            .font_family = Some(family.into());
        self
    }
}

impl From<&DesignConfig> for PartialDesignConfig {
    fn from(config: &DesignConfig) -> Self {
        Self {
            colors: Some(PartialColors {
                primary: Some(config.colors.primary.clone()),
                accent: Some(config.colors.accent.clone()),
                background: Some(config.colors.background.clone()),
                foreground: Some(config.colors.foreground.clone()),
            }),
            typography: Some(PartialTypography {
                font_family: Some(config.typography.font_family.clone()),
                scale: Some(config.typography.scale),
            }),
            spacing: Some(PartialSpacing {
                density: Some(config.spacing.density),
            }),
            borders: Some(PartialBorders {
                radius: Some(config.borders.radius),
            }),
            shadows: Some(PartialShadows {
                intensity: Some(config.shadows.intensity),
            }),
            layout: Some(PartialLayout {
                container: Some(config.layout.container),
            }),
            components: Some(PartialComponents {
                button_style: Some(config.components.button_style),
                card_style: Some(config.components.card_style),
            }),
            icons: Some(PartialIcons {
                style: Some(config.icons.style),
                size: Some(config.icons.size),
            }),
            motion: Some(PartialMotion {
                enabled: Some(config.motion.enabled),
                duration: Some(config.motion.duration),
                easing: Some(config.motion.easing),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_deserialize_to_defaults() {
        let config: DesignConfig =
            serde_json::from_str(r##"{"colors": {"primary": "#ff0000"}}"##).unwrap();

        assert_eq!(config.colors.primary, "#ff0000");
        assert_eq!(config.colors.background, "#ffffff");
        assert_eq!(config.borders.radius, Radius::Md);
        assert!(config.motion.enabled);
    }

    #[test]
    fn test_overlay_keeps_sibling_fields() {
        let mut config = DesignConfig::default();
        let partial = PartialDesignConfig {
            motion: Some(PartialMotion {
                easing: Some(Easing::Spring),
                ..Default::default()
            }),
            ..Default::default()
        };

        config.overlay(&partial);

        assert_eq!(config.motion.easing, Easing::Spring);
        assert!(config.motion.enabled);
        assert_eq!(config.motion.duration, MotionDuration::Normal);
    }

    #[test]
    fn test_partial_round_trips_camel_case_keys() {
        let json = r#"{"components": {"buttonStyle": "pill"}, "typography": {"fontFamily": "Manrope"}}"#;
        let partial: PartialDesignConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            partial.components.as_ref().unwrap().button_style,
            Some(ButtonStyle::Pill)
        );
        assert_eq!(
            partial.typography.as_ref().unwrap().font_family.as_deref(),
            Some("Manrope")
        );
        assert!(partial.components.as_ref().unwrap().card_style.is_none());
    }

    #[test]
    fn test_full_partial_reproduces_config() {
        let mut source = DesignConfig::default();
        source.borders.radius = Radius::Xl;
        source.colors.accent = "#10b981".to_string();

        let rebuilt = DesignConfig::default().with_overlay(&PartialDesignConfig::from(&source));
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_empty_partial() {
        assert!(PartialDesignConfig::default().is_empty());
        assert!(!PartialDesignConfig::default().radius(Radius::Lg).is_empty());
    }
}
