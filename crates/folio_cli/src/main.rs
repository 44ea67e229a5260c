//! Folio CLI
//!
//! Inspects theme presets, colour catalogues and resolved component styles,
//! and edits JSON page files through the document model.

mod config;
mod page;
mod theme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_theme::{ButtonVariant, VisualStyle};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::FolioConfig;
use page::PageCommand;
use theme::ThemeSource;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Design-system documentation editor tools", long_about = None)]
struct Cli {
    /// Directory containing folio.toml, or the file itself
    #[arg(long, global = true, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in theme presets
    Presets,

    /// Print the colour catalogue of a theme
    Catalog {
        #[command(flatten)]
        source: ThemeSource,

        /// Output JSON instead of grouped text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a button style to JSON
    Button {
        #[command(flatten)]
        source: ThemeSource,

        #[arg(long, default_value = "primary")]
        variant: ButtonVariant,

        #[arg(long, default_value = "flat")]
        style: VisualStyle,
    },

    /// Pick dark or light text for a background colour
    Contrast {
        #[arg(value_name = "HEX")]
        hex: String,
    },

    /// Print a theme as CSS custom properties
    Css {
        #[command(flatten)]
        source: ThemeSource,
    },

    /// Report missing and invalid theme fields
    Check {
        #[command(flatten)]
        source: ThemeSource,
    },

    /// Edit a JSON page file
    #[command(subcommand)]
    Page(PageCommand),

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(cli)?;
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}

/// Run a parsed command; returns what to print on stdout.
fn run(cli: Cli) -> Result<String> {
    let config = FolioConfig::discover(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Presets => theme::presets()?,
        Commands::Catalog { source, json } => theme::catalog(&source.load(&config)?, json)?,
        Commands::Button {
            source,
            variant,
            style,
        } => theme::button(&source.load(&config)?, variant, style)?,
        Commands::Contrast { hex } => theme::contrast(&hex),
        Commands::Css { source } => theme::css_variables(&source.load(&config)?)?,
        Commands::Check { source } => theme::check(&source.load(&config)?)?,
        Commands::Page(command) => page::run(command, &config.editor.id_prefix)?,
        Commands::Config => config.to_toml()?,
    };
    Ok(output)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
