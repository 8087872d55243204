//! Configuration management CLI commands.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::compiler::SpecFormat;
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default spec format (markdown, json, css)
    #[arg(long, value_name = "FORMAT")]
    format: Option<SpecFormat>,

    /// Directory for generated specs
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Autosave debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    autosave_delay: Option<u64>,

    /// Fixed randomizer seed
    #[arg(long, value_name = "N", conflicts_with = "clear_seed")]
    seed: Option<u64>,

    /// Remove the fixed randomizer seed
    #[arg(long)]
    clear_seed: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    export: ExportOutput,
    autosave: AutosaveOutput,
    randomizer: RandomizerOutput,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    default_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

#[derive(Serialize, Debug)]
struct AutosaveOutput {
    delay_ms: u64,
}

#[derive(Serialize, Debug)]
struct RandomizerOutput {
    seed: Option<u64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.format.is_none()
            && self.output_dir.is_none()
            && self.autosave_delay.is_none()
            && self.seed.is_none()
            && !self.clear_seed
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --output-dir, --autosave-delay, --seed or --clear-seed",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(format) = self.format {
            config.export.default_format = format;
        }

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.export.output_dir = Some(path.clone());
        }

        if let Some(delay) = self.autosave_delay {
            config.autosave.delay_ms = delay;
        }

        if let Some(seed) = self.seed {
            config.randomizer.seed = Some(seed);
        }
        if self.clear_seed {
            config.randomizer.seed = None;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        export: ExportOutput {
            default_format: config.export.default_format.to_string(),
            output_dir: config
                .export
                .output_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        autosave: AutosaveOutput {
            delay_ms: config.autosave.delay_ms,
        },
        randomizer: RandomizerOutput {
            seed: config.randomizer.seed,
        },
    };

    println!("{}", to_json(&output)?);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("StyleSpec Configuration");
    println!("=======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Export:");
    println!("  Default Format: {}", config.export.default_format);
    match &config.export.output_dir {
        Some(dir) => println!("  Output Directory: {}", dir.display()),
        None => println!("  Output Directory: (current directory)"),
    }
    println!();

    println!("Autosave:");
    println!("  Delay: {} ms", config.autosave.delay_ms);
    println!();

    println!("Randomizer:");
    match config.randomizer.seed {
        Some(seed) => println!("  Seed: {seed}"),
        None => println!("  Seed: (random)"),
    }
    println!();
}
