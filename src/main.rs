//! StyleSpec - design specifications for AI coding assistants
//!
//! Resolves design tokens, shuffles unlocked design choices and compiles
//! them into Markdown, JSON or CSS specifications.

use clap::{Parser, Subcommand};
use stylespec::cli::{
    CompileArgs, ConfigArgs, ExitCode, RandomizeArgs, ResolveArgs, SectionsArgs, SetsArgs,
    StylesArgs,
};
use stylespec::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// StyleSpec - design specifications for AI coding assistants
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List style presets
    Styles(StylesArgs),
    /// List curated sets
    Sets(SetsArgs),
    /// Compile an export state into a specification
    Compile(CompileArgs),
    /// Shuffle unlocked design choices
    Randomize(RandomizeArgs),
    /// Resolve a design configuration for a style preset
    Resolve(ResolveArgs),
    /// Split a markdown specification into sections
    Sections(SectionsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    // Bad flags are input errors, not I/O errors
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::Validation
            } else {
                ExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    // Logs go to stderr so stdout stays pipeable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Styles(args) => args.execute(),
        Commands::Sets(args) => args.execute(),
        Commands::Compile(args) => args.execute(),
        Commands::Randomize(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("{APP_NAME}: error: {e}");
            std::process::exit(e.exit_code().code());
        }
    }
}
