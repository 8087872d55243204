//! Export page state: the compiled domain fields, the lock set and the
//! view-only fields that never reach the compiler.

use crate::models::design_config::DesignConfig;
use crate::models::tokens::{
    ButtonStyle, CardStyle, Density, InputStyle, ModalStyle, Mood, MotionDuration, NavStyle,
    Radius,
};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template used when none is chosen.
pub const DEFAULT_TEMPLATE_ID: &str = "saas-landing";
/// Style preset used when none is chosen.
pub const DEFAULT_STYLE_ID: &str = "minimal";
/// Font used when none is chosen.
pub const DEFAULT_FONT: &str = "Inter";

/// Primary, secondary and accent colors, moved together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTriad {
    /// Brand color
    pub primary: String,
    /// Supporting color
    pub secondary: String,
    /// Highlight color
    pub accent: String,
}

impl ColorTriad {
    /// Creates a triad from three hex strings.
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }
}

impl Default for ColorTriad {
    fn default() -> Self {
        Self::new("#2563eb", "#64748b", "#f59e0b")
    }
}

/// A randomizable export field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockField {
    /// Color triad
    Color,
    /// Font family
    Font,
    /// Spacing density
    Density,
    /// Mood
    Mood,
    /// Button style
    Buttons,
    /// Card style
    Cards,
    /// Input style
    Inputs,
    /// Navigation style
    Navigation,
    /// Modal style
    Modals,
}

impl LockField {
    /// Every lockable field.
    pub const ALL: [Self; 9] = [
        Self::Color,
        Self::Font,
        Self::Density,
        Self::Mood,
        Self::Buttons,
        Self::Cards,
        Self::Inputs,
        Self::Navigation,
        Self::Modals,
    ];

    /// Stable name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Font => "font",
            Self::Density => "density",
            Self::Mood => "mood",
            Self::Buttons => "buttons",
            Self::Cards => "cards",
            Self::Inputs => "inputs",
            Self::Navigation => "navigation",
            Self::Modals => "modals",
        }
    }
}

impl fmt::Display for LockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                anyhow!(
                    "Unknown lock field '{s}'. Expected one of: {}",
                    accepted.join(", ")
                )
            })
    }
}

/// One lock flag per randomizable field.
///
/// A locked field keeps its value across every randomize call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct LockSet {
    pub color: bool,
    pub font: bool,
    pub density: bool,
    pub mood: bool,
    pub buttons: bool,
    pub cards: bool,
    pub inputs: bool,
    pub navigation: bool,
    pub modals: bool,
}

impl LockSet {
    /// Lock set with every field locked.
    #[must_use]
    pub const fn all_locked() -> Self {
        Self {
            color: true,
            font: true,
            density: true,
            mood: true,
            buttons: true,
            cards: true,
            inputs: true,
            navigation: true,
            modals: true,
        }
    }

    /// Builds a lock set from a list of locked fields.
    #[must_use]
    pub fn from_fields(fields: &[LockField]) -> Self {
        let mut locks = Self::default();
        for field in fields {
            locks.set(*field, true);
        }
        locks
    }

    /// Returns whether `field` is locked.
    #[must_use]
    pub const fn is_locked(&self, field: LockField) -> bool {
        match field {
            LockField::Color => self.color,
            LockField::Font => self.font,
            LockField::Density => self.density,
            LockField::Mood => self.mood,
            LockField::Buttons => self.buttons,
            LockField::Cards => self.cards,
            LockField::Inputs => self.inputs,
            LockField::Navigation => self.navigation,
            LockField::Modals => self.modals,
        }
    }

    /// Sets the lock flag for `field`.
    pub fn set(&mut self, field: LockField, locked: bool) {
        let flag = match field {
            LockField::Color => &mut self.color,
            LockField::Font => &mut self.font,
            LockField::Density => &mut self.density,
            LockField::Mood => &mut self.mood,
            LockField::Buttons => &mut self.buttons,
            LockField::Cards => &mut self.cards,
            LockField::Inputs => &mut self.inputs,
            LockField::Navigation => &mut self.navigation,
            LockField::Modals => &mut self.modals,
        };
        *flag = locked;
    }

    /// Flips the lock flag for `field`.
    pub fn toggle(&mut self, field: LockField) {
        self.set(field, !self.is_locked(field));
    }

    /// Fields currently locked, in declaration order.
    #[must_use]
    pub fn locked_fields(&self) -> Vec<LockField> {
        LockField::ALL
            .into_iter()
            .filter(|field| self.is_locked(*field))
            .collect()
    }
}

/// Domain state of an export session. Everything here is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportState {
    /// Page template identifier
    pub template_id: String,
    /// Style preset identifier
    pub style_id: String,
    /// Generated project name
    pub project_name: String,
    /// Brand color triad; `colors.primary` is the brand color
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
    /// Lock flags
    pub locks: LockSet,
    /// Curated set the state currently equals, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated_set: Option<String>,
}

impl Default for ExportState {
    fn default() -> Self {
        Self::with_name("untitled-project")
    }
}

impl ExportState {
    /// Creates a state with default choices and the given project name.
    pub fn with_name(project_name: impl Into<String>) -> Self {
        Self {
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
            project_name: project_name.into(),
            colors: ColorTriad::default(),
            font: DEFAULT_FONT.to_string(),
            density: Density::default(),
            mood: Mood::default(),
            button_style: ButtonStyle::default(),
            card_style: CardStyle::default(),
            input_style: InputStyle::default(),
            nav_style: NavStyle::default(),
            modal_style: ModalStyle::default(),
            locks: LockSet::default(),
            curated_set: None,
        }
    }

    /// Maps a Studio design configuration onto export choices.
    ///
    /// Fields the configuration has no equivalent for keep their defaults.
    pub fn from_design_config(
        config: &DesignConfig,
        template_id: impl Into<String>,
        style_id: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        let button_style = match config.borders.radius {
            Radius::None | Radius::Sm => ButtonStyle::Sharp,
            Radius::Md | Radius::Lg | Radius::Xl => ButtonStyle::Rounded,
            Radius::Full => ButtonStyle::Pill,
        };
        let mood = if config.motion.enabled {
            match config.motion.duration {
                MotionDuration::Fast => Mood::Serious,
                MotionDuration::Normal => Mood::Neutral,
                MotionDuration::Slow => Mood::Friendly,
            }
        } else {
            Mood::Serious
        };
        let defaults = ColorTriad::default();

        Self {
            template_id: template_id.into(),
            style_id: style_id.into(),
            colors: ColorTriad {
                primary: config.colors.primary.clone(),
                secondary: defaults.secondary,
                accent: config.colors.accent.clone(),
            },
            font: config.typography.font_family.clone(),
            density: config.spacing.density,
            mood,
            button_style,
            card_style: config.components.card_style,
            ..Self::with_name(project_name)
        }
    }

    /// Brand color.
    #[must_use]
    pub fn brand_color(&self) -> &str {
        &self.colors.primary
    }

    /// Whether `field` holds the same value in both states.
    #[must_use]
    pub fn field_eq(&self, other: &Self, field: LockField) -> bool {
        match field {
            LockField::Color => self.colors == other.colors,
            LockField::Font => self.font == other.font,
            LockField::Density => self.density == other.density,
            LockField::Mood => self.mood == other.mood,
            LockField::Buttons => self.button_style == other.button_style,
            LockField::Cards => self.card_style == other.card_style,
            LockField::Inputs => self.input_style == other.input_style,
            LockField::Navigation => self.nav_style == other.nav_style,
            LockField::Modals => self.modal_style == other.modal_style,
        }
    }
}

/// Tab shown on the export page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ActiveTab {
    #[default]
    Preview,
    Markdown,
    Json,
    Css,
}

/// Preview viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum DeviceSize {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// View-only state. Never compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    /// Active tab
    pub active_tab: ActiveTab,
    /// Preview viewport
    pub device: DeviceSize,
    /// Preview zoom in percent
    pub zoom: u16,
    /// Dark preview
    pub dark_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::default(),
            device: DeviceSize::default(),
            zoom: 100,
            dark_mode: false,
        }
    }
}

/// One export session: the compiled state plus the view around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSession {
    /// Compiled state
    pub state: ExportState,
    /// View-only state
    pub view: ViewState,
}
