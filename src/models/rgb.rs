//! RGB color handling with hex parsing, formatting and shading.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Design tokens carry colors as free-form hex strings; this type is the
/// parsed form used whenever a derived shade has to be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use stylespec::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a lowercase, zero-padded hex string ("#rrggbb").
    ///
    /// # Examples
    ///
    /// ```
    /// use stylespec::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 8, 255).to_hex(), "#0008ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns a darker shade of the color.
    ///
    /// Every channel is reduced by `round(255 * percent / 100)` and clamped to
    /// `0..=255`, so black stays black and `percent = 0` is the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylespec::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ea2a33").unwrap();
    /// assert_eq!(color.darken(10.0).to_hex(), "#d01019");
    /// ```
    #[must_use]
    pub fn darken(&self, percent: f64) -> Self {
        let amount = (255.0 * percent / 100.0).round();
        let shade = |channel: u8| (f64::from(channel) - amount).clamp(0.0, 255.0) as u8;

        Self {
            r: shade(self.r),
            g: shade(self.g),
            b: shade(self.b),
        }
    }

    /// Perceived brightness (YIQ), 0-255.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        let yiq = (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114)
            / 1000;
        yiq as u8
    }

    /// Whether dark text reads better than white text on this color.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.brightness() >= 160
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Darkens a hex color string by `percent`.
///
/// # Errors
///
/// Returns an error if `hex` is not a valid "#RRGGBB" color.
pub fn darken(hex: &str, percent: f64) -> Result<String> {
    Ok(RgbColor::from_hex(hex)?.darken(percent).to_hex())
}
