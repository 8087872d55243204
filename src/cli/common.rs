//! Shared CLI plumbing: error type, exit codes, state loading and output.

use crate::config::Config;
use crate::models::ExportState;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown identifiers, malformed files, invalid flags
    Validation = 1,
    /// Filesystem, serialization or clipboard failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the application config, falling back to defaults on error.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid configuration: {:#}", e);
        Config::default()
    })
}

/// Reads an export state from a JSON file.
pub fn load_state(path: &Path) -> CliResult<ExportState> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read state file {}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid state file {}: {e}", path.display()))
    })
}

/// Serializes a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

/// Resolves an output path. Bare file names land in the configured output
/// directory when one is set.
pub fn resolve_output_path(path: &Path, config: &Config) -> PathBuf {
    let is_bare_name = path.parent().map_or(true, |p| p.as_os_str().is_empty());
    match &config.export.output_dir {
        Some(dir) if is_bare_name && path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Writes `content` to a file, the clipboard or stdout.
///
/// A clipboard failure is not an error: the content is printed instead.
pub fn emit(content: &str, output: Option<&Path>, copy: bool, config: &Config) -> CliResult<()> {
    if let Some(path) = output {
        let path = resolve_output_path(path, config);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
        eprintln!("✓ Wrote {}", path.display());
        return Ok(());
    }

    if copy {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(content)) {
            Ok(()) => {
                eprintln!("✓ Copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                eprintln!("Clipboard unavailable, printing to stdout instead");
            }
        }
    }

    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}
