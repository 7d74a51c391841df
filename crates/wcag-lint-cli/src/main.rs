//! wcag-lint CLI tool.
//!
//! Usage:
//! ```bash
//! wcag-lint scan [OPTIONS] [FILES]...
//! wcag-lint scan --all
//! wcag-lint list-rules
//! wcag-lint contrast text-gray-500 bg-white
//! wcag-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Accessibility scanner for TSX/JSX components
#[derive(Parser)]
#[command(name = "wcag-lint")]
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
    /// Scan component files for accessibility issues
    Scan {
        /// Files to scan (.tsx / .jsx; others are skipped)
        files: Vec<PathBuf>,

        /// Scan every supported file under the root
        #[arg(long)]
        all: bool,

        /// Project root (default: current directory)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    ListRules,

    /// Check the contrast of a foreground/background pair
    Contrast {
        /// Foreground: palette token, utility class, hex or rgb()
        foreground: String,

        /// Background: palette token, utility class, hex or rgb()
        background: String,

        /// CSS font size, e.g. 18px
        #[arg(long, default_value = "16px")]
        font_size: String,

        /// Numeric font weight or "bold"
        #[arg(long, default_value = "400")]
        font_weight: String,

        /// Conformance level
        #[arg(long, default_value = "AA")]
        level: wcag_lint_contrast::WcagLevel,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Reports go to stdout; logs must not mix into them.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan {
            files,
            all,
            root,
            format,
            rules,
            exclude,
        } => {
            let source = config_resolver::resolve(&root, cli.config.as_deref());
            let options = commands::scan::ScanOptions {
                files,
                all,
                root,
                format,
                rules,
                exclude,
                verbose: cli.verbose,
            };
            let outcome = commands::scan::run(options, &source)?;
            if outcome.should_fail() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => commands::list_rules::run(),
        Commands::Contrast {
            foreground,
            background,
            font_size,
            font_weight,
            level,
            json,
        } => commands::contrast::run(
            &foreground,
            &background,
            &font_size,
            &font_weight,
            level,
            json,
        ),
        Commands::Init { force } => commands::init::run(Path::new("."), force),
    }
}
