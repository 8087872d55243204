//! `sections` command: split a markdown spec into its `##` sections.

use crate::cli::common::{emit, load_config, to_json, CliError, CliResult};
use crate::compiler::parse_sections;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Parse a markdown specification into a JSON section map
#[derive(Debug, Clone, Args)]
pub struct SectionsArgs {
    /// Markdown file to parse
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print only the body of this section
    #[arg(long, value_name = "HEADING")]
    pub section: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SectionsArgs {
    /// Execute the sections command
    pub fn execute(&self) -> CliResult<()> {
        let markdown = fs::read_to_string(&self.input).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.input.display()))
        })?;
        let sections = parse_sections(&markdown);

        let content = match &self.section {
            Some(heading) => sections.get(heading).cloned().ok_or_else(|| {
                let known: Vec<&str> = sections.keys().map(String::as_str).collect();
                CliError::validation(format!(
                    "Section '{heading}' not found. Available: {}",
                    known.join(", ")
                ))
            })?,
            None => to_json(&sections)?,
        };

        emit(&content, self.output.as_deref(), false, &load_config())
    }
}
