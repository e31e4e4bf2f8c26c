//! design-lint CLI tool.
//!
//! Usage:
//! ```bash
//! design-lint check [OPTIONS] [PATH]
//! design-lint list-rules
//! design-lint init
//! design-lint icons search <NAME>
//! ```
//!
//! Exit status: `0` clean, `1` violations found, `2` configuration or fatal
//! error.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Design-system compliance checker for JSX, TSX and CSS sources
#[derive(Parser)]
#[command(name = "design-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run compliance checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules, by name or code (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Include patterns; replaces the configured ones
        #[arg(short, long)]
        include: Vec<String>,

        /// Icon vocabulary file (TOML or JSON)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Rule preset: recommended, strict or minimal
        #[arg(long)]
        preset: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Query the icon vocabulary
    Icons {
        /// Icon vocabulary file (TOML or JSON)
        #[arg(long, global = true)]
        vocabulary: Option<PathBuf>,

        #[command(subcommand)]
        command: IconsCommand,
    },
}

#[derive(Subcommand)]
enum IconsCommand {
    /// Rank vocabulary names close to NAME
    Search {
        /// Icon name to look up
        name: String,

        /// Maximum edit distance for candidates
        #[arg(long, default_value_t = design_lint_core::matcher::DEFAULT_MAX_DISTANCE)]
        max_distance: usize,
    },

    /// Print vocabulary statistics
    Stats,
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source excerpts with labeled spans.
    Rich,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            include,
            vocabulary,
            preset,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let args = commands::check::CheckArgs {
                path,
                format,
                rules,
                exclude,
                include,
                vocabulary,
                preset,
            };
            commands::check::run(&args, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Icons {
            vocabulary,
            command,
        } => {
            let source = config_resolver::resolve(std::path::Path::new("."), cli.config.as_deref());
            let loaded = commands::load_config(&source)?;
            let vocabulary = commands::load_vocabulary(vocabulary.as_deref(), &loaded)?;
            match command {
                IconsCommand::Search { name, max_distance } => {
                    commands::icons::search(&vocabulary, &name, max_distance);
                }
                IconsCommand::Stats => commands::icons::stats(&vocabulary),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
