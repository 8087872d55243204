//! Specification compiler.
//!
//! Turns an [`ExportState`] into a Markdown, JSON or CSS specification.
//! Compilation is total: unknown identifiers and malformed colors fall back
//! to catalog defaults, and for a fixed state the output is identical apart
//! from the JSON timestamp.

pub mod css;
pub mod json;
pub mod markdown;
pub mod tokens;

pub use css::generate_css;
pub use json::{parse_sections, JsonArtifact, FORMAT_TAG};
pub use markdown::{generate_markdown, SECTION_HEADINGS};
pub use tokens::DerivedTokens;

use crate::catalog::Catalog;
use crate::models::ExportState;
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format of a generated specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecFormat {
    /// Prose specification for AI coding assistants
    #[default]
    Markdown,
    /// Machine-readable artifact
    Json,
    /// `:root` custom properties
    Css,
}

impl SpecFormat {
    /// All formats.
    pub const ALL: [Self; 3] = [Self::Markdown, Self::Json, Self::Css];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Css => "css",
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Css => "css",
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            _ => Err(anyhow!(
                "Unknown format '{s}'. Expected one of: markdown, json, css"
            )),
        }
    }
}

/// An immutable generated specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSpec {
    format: SpecFormat,
    content: String,
}

impl GeneratedSpec {
    /// Output format.
    #[must_use]
    pub const fn format(&self) -> SpecFormat {
        self.format
    }

    /// Text content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Consumes the spec, returning its text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }

    /// Section map of a markdown spec. Other formats have none.
    #[must_use]
    pub fn sections(&self) -> Option<IndexMap<String, String>> {
        (self.format == SpecFormat::Markdown).then(|| parse_sections(&self.content))
    }

    /// Suggested file name, e.g. `calm-otter-spec.md`.
    #[must_use]
    pub fn file_name(&self, project_name: &str) -> String {
        format!("{}-spec.{}", project_name, self.format.extension())
    }
}

impl fmt::Display for GeneratedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Compiles `state` into the requested format, stamped with the current time.
#[must_use]
pub fn compile(state: &ExportState, catalog: &Catalog, format: SpecFormat) -> GeneratedSpec {
    compile_at(state, catalog, format, Utc::now())
}

/// Compiles `state` with an explicit JSON timestamp.
#[must_use]
pub fn compile_at(
    state: &ExportState,
    catalog: &Catalog,
    format: SpecFormat,
    generated_at: DateTime<Utc>,
) -> GeneratedSpec {
    let tokens = DerivedTokens::derive(state, catalog);

    let content = match format {
        SpecFormat::Markdown => generate_markdown(&tokens),
        SpecFormat::Css => generate_css(&tokens),
        SpecFormat::Json => {
            let markdown = generate_markdown(&tokens);
            let artifact = JsonArtifact::from_markdown(state, &markdown, generated_at);
            artifact.to_json_pretty().unwrap_or_else(|e| {
                tracing::error!("Failed to serialize JSON artifact: {}", e);
                String::from("{}")
            })
        }
    };

    GeneratedSpec { format, content }
}
