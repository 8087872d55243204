//! `resolve` command: default < style preset < saved overrides.

use crate::autosave::{AutosaveCoordinator, FileStore};
use crate::catalog::Catalog;
use crate::cli::catalog::load_catalog;
use crate::cli::common::{emit, load_config, to_json, CliError, CliResult};
use crate::compiler::{self, JsonArtifact, SpecFormat};
use crate::models::{DesignConfig, ExportState, PartialDesignConfig};
use crate::resolver::resolve_style;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a design configuration for a style preset
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Style preset id; unknown ids use the canonical preset
    #[arg(long, value_name = "ID")]
    pub style: Option<String>,

    /// Saved overrides (partial configuration JSON, or a file written by --save)
    #[arg(long, value_name = "FILE")]
    pub saved: Option<PathBuf>,

    /// Project name recorded in the artifact
    #[arg(long, value_name = "NAME", default_value = "untitled-project")]
    pub name: String,

    /// Template used when compiling with --spec
    #[arg(long, value_name = "ID")]
    pub template: Option<String>,

    /// Compile the resolved configuration into a specification of this format
    #[arg(long, value_name = "FORMAT")]
    pub spec: Option<SpecFormat>,

    /// Persist the resolved configuration to this JSON file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Reads saved overrides. Files written by `--save` wrap the configuration
/// in a `config` key next to `modifiedAt`.
pub fn load_saved(path: &Path) -> CliResult<PartialDesignConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read saved config {}: {e}", path.display())))?;
    let mut value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid saved config {}: {e}", path.display()))
    })?;

    if value.get("modifiedAt").is_some() {
        if let Some(config) = value.get_mut("config") {
            value = config.take();
        }
    }

    serde_json::from_value(value).map_err(|e| {
        CliError::validation(format!("Invalid saved config {}: {e}", path.display()))
    })
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = load_catalog()?;

        let style_id = self
            .style
            .clone()
            .unwrap_or_else(|| catalog.default_style().id.clone());
        let saved = match &self.saved {
            Some(path) => load_saved(path)?,
            None => PartialDesignConfig::default(),
        };
        let resolved = resolve_style(&catalog, &style_id, &saved);

        if let Some(path) = &self.save {
            save_resolved(path, &resolved, config.autosave.delay())?;
        }

        let content = match self.spec {
            Some(format) => self.compile(&catalog, &style_id, &resolved, format),
            None => to_json(&JsonArtifact::from_config(&self.name, &resolved, Utc::now()))?,
        };

        emit(&content, self.output.as_deref(), false, &config)
    }

    fn compile(
        &self,
        catalog: &Catalog,
        style_id: &str,
        resolved: &DesignConfig,
        format: SpecFormat,
    ) -> String {
        let template_id = self
            .template
            .clone()
            .unwrap_or_else(|| catalog.default_template().id.clone());
        let state = ExportState::from_design_config(resolved, template_id, style_id, &self.name);
        compiler::compile(&state, catalog, format).into_content()
    }
}

fn save_resolved(path: &Path, resolved: &DesignConfig, delay: std::time::Duration) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start runtime: {e}")))?;

    let (autosave, _events) = AutosaveCoordinator::new(FileStore::new(path), delay);
    runtime
        .block_on(autosave.save_now(resolved.clone()))
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

    eprintln!("✓ Saved configuration to: {}", path.display());
    Ok(())
}
