//! CLI command handlers for StyleSpec.
//!
//! This module provides headless, scriptable access to the resolver,
//! randomizer and compiler for automation and CI use.

pub mod catalog;
pub mod common;
pub mod compile;
pub mod config;
pub mod randomize;
pub mod resolve;
pub mod sections;

// Re-export types used by main.rs and tests
pub use catalog::{SetsArgs, StylesArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use compile::{CompileArgs, StateArgs};
pub use config::ConfigArgs;
pub use randomize::RandomizeArgs;
pub use resolve::ResolveArgs;
pub use sections::SectionsArgs;
