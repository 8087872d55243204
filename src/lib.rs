//! StyleSpec Library
//!
//! Design-token resolution, lock-aware randomization and compilation of
//! design choices into Markdown, JSON and CSS specifications for AI coding
//! assistants, plus debounced persistence of edited configurations.

// Module declarations
pub mod autosave;
pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod models;
pub mod randomizer;
pub mod resolver;
