//! Catalog listing commands: `styles` and `sets`.

use crate::catalog::Catalog;
use crate::cli::common::{to_json, CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// List style presets
#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List curated sets
#[derive(Debug, Clone, Args)]
pub struct SetsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct StyleItem<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct ListStylesResponse<'a> {
    styles: Vec<StyleItem<'a>>,
    count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetItem<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    primary: &'a str,
    font: &'a str,
    button_style: &'a str,
    card_style: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSetsResponse<'a> {
    curated_sets: Vec<SetItem<'a>>,
    count: usize,
}

pub(crate) fn load_catalog() -> CliResult<Catalog> {
    Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        if self.json {
            let styles: Vec<StyleItem> = catalog
                .styles()
                .iter()
                .map(|style| StyleItem {
                    id: &style.id,
                    name: &style.name,
                    description: &style.description,
                })
                .collect();
            let response = ListStylesResponse {
                count: styles.len(),
                styles,
            };
            println!("{}", to_json(&response)?);
        } else {
            println!("Style presets ({}):", catalog.styles().len());
            for style in catalog.styles() {
                println!("  {:<12} {} - {}", style.id, style.name, style.description);
            }
        }

        Ok(())
    }
}

impl SetsArgs {
    /// Execute the sets command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        if self.json {
            let curated_sets: Vec<SetItem> = catalog
                .curated_sets()
                .iter()
                .map(|set| SetItem {
                    id: &set.id,
                    name: &set.name,
                    description: &set.description,
                    primary: &set.colors.primary,
                    font: &set.font,
                    button_style: set.button_style.as_str(),
                    card_style: set.card_style.as_str(),
                })
                .collect();
            let response = ListSetsResponse {
                count: curated_sets.len(),
                curated_sets,
            };
            println!("{}", to_json(&response)?);
        } else {
            println!("Curated sets ({}):", catalog.curated_sets().len());
            for set in catalog.curated_sets() {
                println!(
                    "  {:<18} {} ({}, {}, {} buttons)",
                    set.id,
                    set.name,
                    set.colors.primary,
                    set.font,
                    set.button_style
                );
            }
        }

        Ok(())
    }
}
