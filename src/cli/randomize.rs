//! `randomize` command.

use crate::cli::catalog::load_catalog;
use crate::cli::common::{emit, load_config, to_json, CliResult};
use crate::cli::compile::StateArgs;
use crate::compiler::{self, SpecFormat};
use crate::models::LockField;
use crate::randomizer::{generate_project_name, randomize, RngSource};
use clap::Args;
use std::path::PathBuf;

/// Shuffle the unlocked fields of an export state
#[derive(Debug, Clone, Args)]
pub struct RandomizeArgs {
    /// Export state flags applied before shuffling
    #[command(flatten)]
    pub state: StateArgs,

    /// Fields to keep (comma-separated: color, font, density, mood, buttons,
    /// cards, inputs, navigation, modals)
    #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
    pub lock: Vec<LockField>,

    /// Seed for a reproducible shuffle (overrides the configured seed)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Also generate a new project name
    #[arg(long)]
    pub rename: bool,

    /// Compile the result into this format instead of printing the state JSON
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<SpecFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RandomizeArgs {
    /// Execute the randomize command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = load_catalog()?;
        let mut rng = RngSource::from_seed(self.seed.or(config.randomizer.seed));
        let mut state = self.state.build(&catalog, &mut rng)?;

        for field in &self.lock {
            state.locks.set(*field, true);
        }

        let mut next = randomize(&state, &catalog, &mut rng);
        if self.rename {
            next.project_name = generate_project_name(&catalog, &mut rng);
        }

        let content = match self.format {
            Some(format) => compiler::compile(&next, &catalog, format).into_content(),
            None => to_json(&next)?,
        };

        emit(&content, self.output.as_deref(), false, &config)
    }
}
