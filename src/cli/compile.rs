//! `compile` command and the export-state flags shared with `randomize`.

use crate::catalog::Catalog;
use crate::cli::catalog::load_catalog;
use crate::cli::common::{emit, load_config, load_state, CliError, CliResult};
use crate::compiler::{self, SpecFormat};
use crate::constants::APP_BINARY_NAME;
use crate::models::{
    ButtonStyle, CardStyle, Density, ExportState, InputStyle, ModalStyle, Mood, NavStyle,
};
use crate::randomizer::{apply_curated_set, new_session, RandomSource, RngSource};
use clap::Args;
use std::path::PathBuf;

/// Flags describing an export state.
///
/// The state starts from `--state` (or a new session with a generated project
/// name), then `--set`, then the individual field flags, so a flag always wins
/// over the set it follows.
#[derive(Debug, Clone, Default, Args)]
pub struct StateArgs {
    /// Export state JSON file to start from
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Project name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Template id (e.g., saas-landing, dashboard)
    #[arg(long, value_name = "ID")]
    pub template: Option<String>,

    /// Style preset id (e.g., minimal, swiss)
    #[arg(long, value_name = "ID")]
    pub style: Option<String>,

    /// Curated set to apply
    #[arg(long, value_name = "ID")]
    pub set: Option<String>,

    /// Primary brand color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Accent color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub accent: Option<String>,

    /// Font family
    #[arg(long, value_name = "FAMILY")]
    pub font: Option<String>,

    /// Spacing density (compact, balanced, spacious)
    #[arg(long)]
    pub density: Option<Density>,

    /// Mood (serious, neutral, friendly)
    #[arg(long)]
    pub mood: Option<Mood>,

    /// Button style (sharp, rounded, pill)
    #[arg(long)]
    pub buttons: Option<ButtonStyle>,

    /// Card style (elevated, bordered, flat)
    #[arg(long)]
    pub cards: Option<CardStyle>,

    /// Input style (outlined, filled, underlined)
    #[arg(long)]
    pub inputs: Option<InputStyle>,

    /// Navigation style (minimal, bordered, floating)
    #[arg(long)]
    pub nav: Option<NavStyle>,

    /// Modal style (centered, sheet, fullscreen)
    #[arg(long)]
    pub modal: Option<ModalStyle>,
}

impl StateArgs {
    /// Builds the export state described by the flags.
    ///
    /// `rng` is only drawn from when no `--state` file is given.
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> CliResult<ExportState> {
        let mut state = match &self.state {
            Some(path) => load_state(path)?,
            None => new_session(catalog, rng).state,
        };

        if let Some(id) = &self.set {
            let set = catalog.curated_set(id).ok_or_else(|| {
                let known: Vec<&str> = catalog.curated_sets().iter().map(|s| s.id.as_str()).collect();
                CliError::validation(format!(
                    "Unknown curated set '{id}'. Available: {}\n\
                     Run `{APP_BINARY_NAME} sets` to see what each set applies.",
                    known.join(", ")
                ))
            })?;
            state = apply_curated_set(&state, set);
        }

        if let Some(name) = &self.name {
            state.project_name.clone_from(name);
        }
        if let Some(template) = &self.template {
            state.template_id.clone_from(template);
        }
        if let Some(style) = &self.style {
            state.style_id.clone_from(style);
        }
        if let Some(primary) = &self.primary {
            state.colors.primary.clone_from(primary);
        }
        if let Some(secondary) = &self.secondary {
            state.colors.secondary.clone_from(secondary);
        }
        if let Some(accent) = &self.accent {
            state.colors.accent.clone_from(accent);
        }
        if let Some(font) = &self.font {
            state.font.clone_from(font);
        }
        if let Some(density) = self.density {
            state.density = density;
        }
        if let Some(mood) = self.mood {
            state.mood = mood;
        }
        if let Some(buttons) = self.buttons {
            state.button_style = buttons;
        }
        if let Some(cards) = self.cards {
            state.card_style = cards;
        }
        if let Some(inputs) = self.inputs {
            state.input_style = inputs;
        }
        if let Some(nav) = self.nav {
            state.nav_style = nav;
        }
        if let Some(modal) = self.modal {
            state.modal_style = modal;
        }

        Ok(state)
    }
}

/// Compile an export state into a design specification
#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Export state flags
    #[command(flatten)]
    pub state: StateArgs,

    /// Output format (markdown, json, css); defaults to the configured format
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<SpecFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy to the clipboard instead of printing
    #[arg(long, conflicts_with = "output")]
    pub copy: bool,

    /// Seed for the generated project name (overrides the configured seed)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl CompileArgs {
    /// Execute the compile command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = load_catalog()?;
        let mut rng = RngSource::from_seed(self.seed.or(config.randomizer.seed));
        let state = self.state.build(&catalog, &mut rng)?;

        let format = self.format.unwrap_or(config.export.default_format);
        let spec = compiler::compile(&state, &catalog, format);

        emit(spec.as_str(), self.output.as_deref(), self.copy, &config)
    }
}
