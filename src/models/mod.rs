//! Data models for design configurations, export state and colors.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are plain data: no catalog lookups, no randomness, no I/O.

pub mod design_config;
pub mod export_state;
pub mod rgb;
pub mod tokens;

// Re-export all model types
pub use design_config::{
    BorderTokens, ColorTokens, ComponentTokens, DesignConfig, IconTokens, LayoutTokens,
    MotionTokens, PartialBorders, PartialColors, PartialComponents, PartialDesignConfig,
    PartialIcons, PartialLayout, PartialMotion, PartialShadows, PartialSpacing,
    PartialTypography, ShadowTokens, SpacingTokens, TypographyTokens,
};
pub use export_state::{
    ActiveTab, ColorTriad, DeviceSize, ExportSession, ExportState, LockField, LockSet, ViewState,
};
pub use rgb::RgbColor;
pub use tokens::{
    ButtonStyle, CardStyle, ContainerWidth, Density, Easing, IconSize, IconStyle, InputStyle,
    ModalStyle, Mood, MotionDuration, NavStyle, Radius, ShadowIntensity, TypeScale,
};
