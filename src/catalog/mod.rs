//! Token catalog: style presets, templates, curated sets and option domains.
//!
//! The catalog is read-only data embedded at build time. It is loaded once
//! and passed by reference into the resolver, randomizer and compiler, so
//! tests can substitute a smaller catalog.
//!
//! Lookups by identifier never fail: an unknown identifier resolves to the
//! first (canonical) entry of the list.

pub mod presets;

pub use presets::{CuratedSet, PreviewColors, StylePreset, Template, TemplateSection};

use crate::models::{ColorTriad, RgbColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Blocks every template outline contains, in this relative order.
pub const CORE_PAGE_BLOCKS: [&str; 4] = ["Navigation", "Hero", "Features", "Call to Action"];

/// Immutable registry of everything the configuration space is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    styles: Vec<StylePreset>,
    templates: Vec<Template>,
    curated_sets: Vec<CuratedSet>,
    fonts: Vec<String>,
    palette: Vec<ColorTriad>,
    project_adjectives: Vec<String>,
    project_nouns: Vec<String>,
}

impl Catalog {
    /// Loads the built-in catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the embedded data cannot be parsed or is invalid.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/catalog.json");
        Self::from_json(json_data).context("Failed to load built-in catalog")
    }

    /// Loads a catalog from a JSON file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .context(format!("Failed to load catalog file: {}", path.display()))
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the catalog is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every list has a canonical first entry and ids are unique.
    ///
    /// # Errors
    /// Returns an error describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.styles.is_empty() {
            anyhow::bail!("Catalog must contain at least one style preset");
        }
        if self.templates.is_empty() {
            anyhow::bail!("Catalog must contain at least one template");
        }
        if self.fonts.is_empty() {
            anyhow::bail!("Catalog must contain at least one font");
        }
        if self.palette.is_empty() {
            anyhow::bail!("Catalog must contain at least one palette entry");
        }
        if self.project_adjectives.is_empty() || self.project_nouns.is_empty() {
            anyhow::bail!("Catalog must contain project name words");
        }

        check_unique("style preset", self.styles.iter().map(|s| s.id.as_str()))?;
        check_unique("template", self.templates.iter().map(|t| t.id.as_str()))?;
        check_unique("curated set", self.curated_sets.iter().map(|c| c.id.as_str()))?;

        for template in &self.templates {
            let mut names = template.sections.iter().map(|section| section.name.as_str());
            for block in CORE_PAGE_BLOCKS {
                if !names.any(|name| name == block) {
                    anyhow::bail!(
                        "Template '{}' is missing the '{}' block (expected in order: {})",
                        template.id,
                        block,
                        CORE_PAGE_BLOCKS.join(", ")
                    );
                }
            }
        }

        let triads = self
            .palette
            .iter()
            .chain(self.curated_sets.iter().map(|set| &set.colors));
        for triad in triads {
            for hex in [&triad.primary, &triad.secondary, &triad.accent] {
                RgbColor::from_hex(hex).context(format!("Invalid catalog color '{hex}'"))?;
            }
        }

        Ok(())
    }

    /// All style presets, canonical first.
    #[must_use]
    pub fn styles(&self) -> &[StylePreset] {
        &self.styles
    }

    /// All templates, canonical first.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// All curated sets.
    #[must_use]
    pub fn curated_sets(&self) -> &[CuratedSet] {
        &self.curated_sets
    }

    /// Font domain.
    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Brand color domain.
    #[must_use]
    pub fn palette(&self) -> &[ColorTriad] {
        &self.palette
    }

    /// Adjectives used for generated project names.
    #[must_use]
    pub fn project_adjectives(&self) -> &[String] {
        &self.project_adjectives
    }

    /// Nouns used for generated project names.
    #[must_use]
    pub fn project_nouns(&self) -> &[String] {
        &self.project_nouns
    }

    /// The canonical style preset.
    #[must_use]
    pub fn default_style(&self) -> &StylePreset {
        &self.styles[0]
    }

    /// The canonical template.
    #[must_use]
    pub fn default_template(&self) -> &Template {
        &self.templates[0]
    }

    /// The canonical brand colors.
    #[must_use]
    pub fn default_colors(&self) -> &ColorTriad {
        &self.palette[0]
    }

    /// Looks up a style preset exactly.
    #[must_use]
    pub fn find_style(&self, id: &str) -> Option<&StylePreset> {
        self.styles.iter().find(|style| style.id == id)
    }

    /// Looks up a style preset, falling back to the canonical one.
    #[must_use]
    pub fn style(&self, id: &str) -> &StylePreset {
        self.find_style(id).unwrap_or_else(|| {
            debug!("Unknown style '{}', using '{}'", id, self.default_style().id);
            self.default_style()
        })
    }

    /// Looks up a template exactly.
    #[must_use]
    pub fn find_template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Looks up a template, falling back to the canonical one.
    #[must_use]
    pub fn template(&self, id: &str) -> &Template {
        self.find_template(id).unwrap_or_else(|| {
            debug!(
                "Unknown template '{}', using '{}'",
                id,
                self.default_template().id
            );
            self.default_template()
        })
    }

    /// Looks up a curated set. There is no fallback: applying an unknown
    /// set is a caller error.
    #[must_use]
    pub fn curated_set(&self, id: &str) -> Option<&CuratedSet> {
        self.curated_sets.iter().find(|set| set.id == id)
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {kind} id '{id}' in catalog");
        }
    }
    Ok(())
}
