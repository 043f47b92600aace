//! Cardkit CLI - render themed profile cards
//!
//! ```bash
//! # Render a profile to a standalone page
//! cardkit render alex.toml --theme ocean --scheme dark -o alex.html
//!
//! # Just the card markup, or the visual tree as JSON
//! cardkit render alex.json --format fragment
//! cardkit render alex.json --format json
//!
//! # List themes / create a starter cardkit.toml
//! cardkit themes
//! cardkit init my-card
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use cardkit_theme::{ColorSchemePreference, ThemeName};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Render themed profile cards
#[derive(Parser, Debug)]
#[command(name = "cardkit")]
#[command(about = "Render themed profile cards to HTML or JSON")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a profile card
    Render {
        /// Profile file (.toml or .json); defaults to [profile] in cardkit.toml
        profile: Option<PathBuf>,

        /// Card theme (dark, light, nature, ocean, sunset)
        #[arg(short, long)]
        theme: Option<ThemeName>,

        /// Color scheme (light, dark, system)
        #[arg(short, long)]
        scheme: Option<ColorSchemePreference>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Element id for the card root
        #[arg(long)]
        id: Option<String>,

        /// Config file or directory containing cardkit.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the available themes
    Themes,

    /// Create a starter cardkit.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Starting theme
        #[arg(short, long, default_value = "light")]
        theme: ThemeName,

        /// Overwrite an existing cardkit.toml
        #[arg(long)]
        force: bool,
    },
}

/// What `cardkit render` writes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full HTML page
    Html,
    /// Card markup only
    Fragment,
    /// Visual tree as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            profile,
            theme,
            scheme,
            format,
            output,
            id,
            config,
        } => commands::render(commands::RenderArgs {
            profile,
            theme,
            scheme,
            format,
            output,
            id,
            config,
        }),
        Commands::Themes => {
            commands::themes();
            Ok(())
        }
        Commands::Init { dir, theme, force } => commands::init(&dir, theme, force),
    }
}
