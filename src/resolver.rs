//! Token resolution: default configuration, then style preset, then saved
//! overrides.
//!
//! Precedence is per leaf field. A saved override of one field in a section
//! never erases the preset or default values of that section's other fields.

use crate::catalog::{Catalog, StylePreset};
use crate::models::{DesignConfig, PartialDesignConfig};

/// Merges `default`, `preset` and `saved` into one concrete configuration.
///
/// For every leaf the result is the saved value if present, else the
/// preset value if present, else the default value. The function is pure.
///
/// # Examples
///
/// ```
/// use stylespec::catalog::Catalog;
/// use stylespec::models::{DesignConfig, PartialDesignConfig, Radius};
/// use stylespec::resolver::resolve;
///
/// let catalog = Catalog::load().unwrap();
/// let swiss = catalog.style("swiss");
///
/// let resolved = resolve(&DesignConfig::default(), swiss, &PartialDesignConfig::default());
/// assert_eq!(resolved.borders.radius, Radius::None);
///
/// let saved = PartialDesignConfig::default().radius(Radius::Lg);
/// let resolved = resolve(&DesignConfig::default(), swiss, &saved);
/// assert_eq!(resolved.borders.radius, Radius::Lg);
/// ```
#[must_use]
pub fn resolve(
    default: &DesignConfig,
    preset: &StylePreset,
    saved: &PartialDesignConfig,
) -> DesignConfig {
    let mut resolved = default.clone();
    resolved.overlay(&preset.defaults);
    resolved.overlay(saved);
    resolved
}

/// Resolves a configuration for a style identifier.
///
/// Unknown identifiers resolve against the catalog's canonical preset.
#[must_use]
pub fn resolve_style(
    catalog: &Catalog,
    style_id: &str,
    saved: &PartialDesignConfig,
) -> DesignConfig {
    resolve(&DesignConfig::default(), catalog.style(style_id), saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PreviewColors;
    use crate::models::{
        ButtonStyle, Density, Easing, MotionDuration, PartialColors, PartialComponents,
        PartialMotion, Radius, ShadowIntensity,
    };

    fn preview() -> PreviewColors {
        PreviewColors {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            accent: "#ff0000".to_string(),
            muted: "#eeeeee".to_string(),
            border: "#cccccc".to_string(),
            card: "#ffffff".to_string(),
        }
    }

    fn preset(defaults: PartialDesignConfig) -> StylePreset {
        StylePreset {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            defaults,
            preview: preview(),
        }
    }

    #[test]
    fn test_preset_overrides_default() {
        let default = DesignConfig::default();
        assert_eq!(default.borders.radius, Radius::Md);

        let swiss = preset(PartialDesignConfig::default().radius(Radius::None));
        let resolved = resolve(&default, &swiss, &PartialDesignConfig::default());

        assert_eq!(resolved.borders.radius, Radius::None);
    }

    #[test]
    fn test_saved_overrides_preset() {
        let swiss = preset(PartialDesignConfig::default().radius(Radius::None));
        let saved = PartialDesignConfig::default().radius(Radius::Lg);

        let resolved = resolve(&DesignConfig::default(), &swiss, &saved);
        assert_eq!(resolved.borders.radius, Radius::Lg);
    }

    #[test]
    fn test_saved_override_keeps_preset_siblings() {
        let preset = preset(PartialDesignConfig {
            colors: Some(PartialColors {
                primary: Some("#ea2a33".to_string()),
                background: Some("#fafafa".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let saved = PartialDesignConfig::default().primary("#00ff00");

        let resolved = resolve(&DesignConfig::default(), &preset, &saved);

        assert_eq!(resolved.colors.primary, "#00ff00");
        assert_eq!(resolved.colors.background, "#fafafa");
        // Neither preset nor saved supply these
        assert_eq!(resolved.colors.accent, DesignConfig::default().colors.accent);
        assert_eq!(
            resolved.colors.foreground,
            DesignConfig::default().colors.foreground
        );
    }

    #[test]
    fn test_precedence_holds_for_every_section() {
        let mut default = DesignConfig::default();
        default.spacing.density = Density::Compact;
        default.shadows.intensity = ShadowIntensity::Strong;

        let preset = preset(PartialDesignConfig {
            components: Some(PartialComponents {
                button_style: Some(ButtonStyle::Pill),
                ..Default::default()
            }),
            motion: Some(PartialMotion {
                duration: Some(MotionDuration::Slow),
                easing: Some(Easing::Spring),
                ..Default::default()
            }),
            ..Default::default()
        });
        let saved = PartialDesignConfig {
            motion: Some(PartialMotion {
                easing: Some(Easing::Linear),
                enabled: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = resolve(&default, &preset, &saved);

        // default only
        assert_eq!(resolved.spacing.density, Density::Compact);
        assert_eq!(resolved.shadows.intensity, ShadowIntensity::Strong);
        // preset only
        assert_eq!(resolved.components.button_style, ButtonStyle::Pill);
        assert_eq!(resolved.motion.duration, MotionDuration::Slow);
        // saved beats preset
        assert_eq!(resolved.motion.easing, Easing::Linear);
        assert!(!resolved.motion.enabled);
    }

    #[test]
    fn test_resolve_is_pure_for_structurally_equal_inputs() {
        let catalog = Catalog::load().unwrap();
        let saved: PartialDesignConfig =
            serde_json::from_str(r#"{"borders": {"radius": "xl"}}"#).unwrap();
        let saved_copy = saved.clone();

        let first = resolve_style(&catalog, "soft", &saved);
        let second = resolve_style(&catalog, "soft", &saved_copy);

        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_style_uses_canonical_preset() {
        let catalog = Catalog::load().unwrap();
        let empty = PartialDesignConfig::default();

        assert_eq!(
            resolve_style(&catalog, "does-not-exist", &empty),
            resolve_style(&catalog, &catalog.default_style().id, &empty)
        );
    }

    #[test]
    fn test_builtin_swiss_scenarios() {
        let catalog = Catalog::load().unwrap();

        let resolved = resolve_style(&catalog, "swiss", &PartialDesignConfig::default());
        assert_eq!(resolved.borders.radius, Radius::None);
        assert_eq!(resolved.colors.primary, "#ea2a33");

        let saved = PartialDesignConfig::default().radius(Radius::Lg);
        let resolved = resolve_style(&catalog, "swiss", &saved);
        assert_eq!(resolved.borders.radius, Radius::Lg);
        assert_eq!(resolved.typography.font_family, "Helvetica Neue");
    }
}
