//! JSON specification artifact and markdown section parsing.

use crate::models::{DesignConfig, ExportState};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Format tag written into every JSON artifact.
pub const FORMAT_TAG: &str = "stylespec/v1";

/// Machine-readable specification.
///
/// Exactly one of `state` or `config` is normally present: export artifacts
/// carry the export state (plus the markdown they were derived from), studio
/// artifacts carry a resolved design configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonArtifact {
    /// Project name
    pub name: String,
    /// Format tag, always [`FORMAT_TAG`] when generated
    pub format: String,
    /// Generation time (RFC 3339, UTC)
    pub generated_at: DateTime<Utc>,
    /// Full export state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ExportState>,
    /// Markdown this artifact was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// `##` sections of the markdown, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<IndexMap<String, String>>,
    /// Resolved design configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DesignConfig>,
}

impl JsonArtifact {
    /// Artifact carrying only the export state.
    #[must_use]
    pub fn from_state(state: &ExportState, generated_at: DateTime<Utc>) -> Self {
        Self {
            name: state.project_name.clone(),
            format: FORMAT_TAG.to_string(),
            generated_at,
            state: Some(state.clone()),
            raw: None,
            sections: None,
            config: None,
        }
    }

    /// Artifact derived from a generated markdown document.
    #[must_use]
    pub fn from_markdown(state: &ExportState, markdown: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            raw: Some(markdown.to_string()),
            sections: Some(parse_sections(markdown)),
            ..Self::from_state(state, generated_at)
        }
    }

    /// Artifact carrying a resolved design configuration.
    #[must_use]
    pub fn from_config(
        name: impl Into<String>,
        config: &DesignConfig,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            format: FORMAT_TAG.to_string(),
            generated_at,
            state: None,
            raw: None,
            sections: None,
            config: Some(config.clone()),
        }
    }

    /// Copy with the timestamp zeroed, for comparisons that ignore it.
    #[must_use]
    pub fn without_timestamp(&self) -> Self {
        Self {
            generated_at: DateTime::<Utc>::default(),
            ..self.clone()
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Splits markdown into its `##` sections.
///
/// Keys are heading texts, values the trimmed body up to the next `##`
/// heading. Text before the first heading is ignored. A repeated heading
/// keeps its first position and its last body.
#[must_use]
pub fn parse_sections(markdown: &str) -> IndexMap<String, String> {
    let heading_regex = Regex::new(r"(?m)^## (.+?)[ \t]*$").unwrap();
    let headings: Vec<_> = heading_regex.captures_iter(markdown).collect();
    let mut sections = IndexMap::new();

    for (index, captures) in headings.iter().enumerate() {
        let (Some(whole), Some(title)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let end = headings
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(markdown.len(), |next| next.start());
        let body = markdown[whole.end()..end].trim();
        sections.insert(title.as_str().trim().to_string(), body.to_string());
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_sections_in_order() {
        let markdown = "# Title\n\nintro\n\n## First\n\nalpha\n\n### Sub\nbeta\n\n## Second\ngamma\n";
        let sections = parse_sections(markdown);

        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["First", "Second"]);
        assert_eq!(sections["First"], "alpha\n\n### Sub\nbeta");
        assert_eq!(sections["Second"], "gamma");
    }

    #[test]
    fn test_parse_sections_without_headings() {
        assert!(parse_sections("# Only a title\n\nno sections").is_empty());
        assert!(parse_sections("").is_empty());
    }

    #[test]
    fn test_parse_sections_empty_body() {
        let sections = parse_sections("## Empty\n## Next\ntext");
        assert_eq!(sections["Empty"], "");
        assert_eq!(sections["Next"], "text");
    }

    #[test]
    fn test_artifact_json_shape() {
        let state = ExportState::with_name("calm-otter");
        let artifact = JsonArtifact::from_markdown(&state, "## A\none\n", timestamp());
        let value: serde_json::Value =
            serde_json::from_str(&artifact.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["name"], "calm-otter");
        assert_eq!(value["format"], FORMAT_TAG);
        assert_eq!(value["generatedAt"], "2025-03-01T12:00:00Z");
        assert_eq!(value["state"]["projectName"], "calm-otter");
        assert_eq!(value["sections"]["A"], "one");
        assert!(value.get("config").is_none());
    }

    #[test]
    fn test_config_artifact_omits_state() {
        let artifact = JsonArtifact::from_config("studio", &DesignConfig::default(), timestamp());
        let value = serde_json::to_value(&artifact).unwrap();

        assert!(value.get("state").is_none());
        assert_eq!(value["config"]["colors"]["primary"], "#2563eb");
    }

    #[test]
    fn test_artifact_round_trips_through_json() {
        let state = ExportState::with_name("calm-otter");
        let artifact = JsonArtifact::from_markdown(&state, "## A\none\n", timestamp());

        let parsed: JsonArtifact =
            serde_json::from_str(&artifact.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, artifact);
    }

    #[test]
    fn test_without_timestamp() {
        let state = ExportState::with_name("calm-otter");
        let first = JsonArtifact::from_state(&state, timestamp());
        let second = JsonArtifact::from_state(&state, Utc::now());

        assert_ne!(first, second);
        assert_eq!(first.without_timestamp(), second.without_timestamp());
    }
}
