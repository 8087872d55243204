//! Closed enumerations for every enumerated design-token leaf.
//!
//! Each token serializes to its kebab-case wire name. Deserialization is
//! lenient: a value outside the domain becomes the domain default, so a
//! stale or hand-edited configuration still resolves. Parsing through
//! [`FromStr`] is strict and is what the CLI uses.

use anyhow::anyhow;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value of the domain, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable wire name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Human-readable name.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Parses a wire name, falling back to the domain default.
            #[must_use]
            pub fn parse_lenient(value: &str) -> Self {
                value.parse().unwrap_or_else(|_| {
                    tracing::debug!(
                        "Unknown {} '{}', falling back to '{}'",
                        $kind,
                        value,
                        Self::default()
                    );
                    Self::default()
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == normalized)
                    .ok_or_else(|| {
                        let accepted: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        anyhow!(
                            "Unknown {} '{}'. Expected one of: {}",
                            $kind,
                            s,
                            accepted.join(", ")
                        )
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::parse_lenient(&value))
            }
        }
    };
}

token_enum! {
    /// Corner-radius class.
    Radius("radius", default = Md) {
        /// Square corners
        None => "none", "None",
        /// 2px
        Sm => "sm", "Small",
        /// 6px
        Md => "md", "Medium",
        /// 8px
        Lg => "lg", "Large",
        /// 12px
        Xl => "xl", "Extra large",
        /// Fully round
        Full => "full", "Full",
    }
}

token_enum! {
    /// Typographic scale.
    TypeScale("type scale", default = Standard) {
        /// Tighter ratio for dense interfaces
        Compact => "compact", "Compact",
        /// Balanced ratio
        Standard => "standard", "Standard",
        /// Large display ratio
        Large => "large", "Large",
    }
}

token_enum! {
    /// Overall shadow intensity.
    ShadowIntensity("shadow intensity", default = Subtle) {
        /// No shadows
        None => "none", "None",
        /// Barely visible
        Subtle => "subtle", "Subtle",
        /// Noticeable elevation
        Medium => "medium", "Medium",
        /// Pronounced elevation
        Strong => "strong", "Strong",
    }
}

token_enum! {
    /// Maximum content container width.
    ContainerWidth("container width", default = Standard) {
        /// 768px
        Narrow => "narrow", "Narrow",
        /// 1200px
        Standard => "standard", "Standard",
        /// 1440px
        Wide => "wide", "Wide",
        /// Edge to edge
        Full => "full", "Full width",
    }
}

token_enum! {
    /// Icon drawing style.
    IconStyle("icon style", default = Outline) {
        /// Stroked outlines
        Outline => "outline", "Outline",
        /// Filled glyphs
        Solid => "solid", "Solid",
        /// Two-tone glyphs
        Duotone => "duotone", "Duotone",
    }
}

token_enum! {
    /// Icon size class.
    IconSize("icon size", default = Md) {
        /// 16px
        Sm => "sm", "Small",
        /// 20px
        Md => "md", "Medium",
        /// 24px
        Lg => "lg", "Large",
    }
}

token_enum! {
    /// Motion duration class.
    MotionDuration("motion duration", default = Normal) {
        /// Quick, utilitarian transitions
        Fast => "fast", "Fast",
        /// Default pacing
        Normal => "normal", "Normal",
        /// Relaxed transitions
        Slow => "slow", "Slow",
    }
}

token_enum! {
    /// Motion easing class.
    Easing("easing", default = EaseOut) {
        /// Decelerating
        EaseOut => "ease-out", "Ease out",
        /// Accelerate then decelerate
        EaseInOut => "ease-in-out", "Ease in-out",
        /// Constant speed
        Linear => "linear", "Linear",
        /// Slight overshoot
        Spring => "spring", "Spring",
    }
}

token_enum! {
    /// Spacing density.
    Density("density", default = Balanced) {
        /// 4-unit base
        Compact => "compact", "Compact",
        /// 8-unit base
        Balanced => "balanced", "Balanced",
        /// 12-unit base
        Spacious => "spacious", "Spacious",
    }
}

token_enum! {
    /// Emotional tone, drives motion timing.
    Mood("mood", default = Neutral) {
        /// Crisp, fast
        Serious => "serious", "Serious",
        /// Even
        Neutral => "neutral", "Neutral",
        /// Soft, bouncy
        Friendly => "friendly", "Friendly",
    }
}

token_enum! {
    /// Button shape.
    ButtonStyle("button style", default = Rounded) {
        /// Square corners
        Sharp => "sharp", "Sharp",
        /// 8-unit corners
        Rounded => "rounded", "Rounded",
        /// Fully round ends
        Pill => "pill", "Pill",
    }
}

token_enum! {
    /// Card surface treatment.
    CardStyle("card style", default = Elevated) {
        /// Shadow only
        Elevated => "elevated", "Elevated",
        /// Border only
        Bordered => "bordered", "Bordered",
        /// Neither shadow nor border
        Flat => "flat", "Flat",
    }
}

token_enum! {
    /// Text input treatment.
    InputStyle("input style", default = Outlined) {
        /// Full border, transparent fill
        Outlined => "outlined", "Outlined",
        /// Muted fill, no border
        Filled => "filled", "Filled",
        /// Bottom border only
        Underlined => "underlined", "Underlined",
    }
}

token_enum! {
    /// Navigation bar treatment.
    NavStyle("navigation style", default = Minimal) {
        /// Plain bar on the page background
        Minimal => "minimal", "Minimal",
        /// Bar separated by a bottom border
        Bordered => "bordered", "Bordered",
        /// Detached, rounded bar with a shadow
        Floating => "floating", "Floating",
    }
}

token_enum! {
    /// Modal presentation.
    ModalStyle("modal style", default = Centered) {
        /// Centered dialog over a scrim
        Centered => "centered", "Centered",
        /// Sheet sliding in from the edge
        Sheet => "sheet", "Sheet",
        /// Full viewport takeover
        Fullscreen => "fullscreen", "Fullscreen",
    }
}
