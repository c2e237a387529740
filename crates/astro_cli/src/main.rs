//! AstroMANIA theme CLI
//!
//! Resolves style queries against the site theme and exports the theme as CSS
//! custom properties or JSON. Settings come from `astro.toml` when present;
//! command-line flags win over the file.

mod config;
mod render;

use anyhow::{Context, Result};
use astro_theme::{provide_store, use_style_accessor, use_theme, ThemeStore};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{AstroConfig, OutputFormat, CONFIG_FILE};
use render::QueryFamily;

/// Resolve and export AstroMANIA theme tokens
#[derive(Parser, Debug)]
#[command(name = "astro-theme")]
#[command(about = "Resolve and export AstroMANIA theme tokens")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the brand palette
    Palette,

    /// Resolve one style query
    Resolve {
        /// Query family
        #[arg(value_enum)]
        family: QueryFamily,

        /// Variant name; omitted means the family default
        variant: Option<String>,

        /// Resolve in dark mode (also set by `start_dark` in the config)
        #[arg(long)]
        dark: bool,
    },

    /// Export both schemes
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Custom property prefix (overrides config)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Write a default astro.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "astro_theme=info,astro_cli=info",
        1 => "astro_theme=debug,astro_cli=debug",
        _ => "astro_theme=trace,astro_cli=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AstroConfig::load_or_default(&cli.config)?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Command::Palette => {
            print!("{}", render::render_palette(format)?);
        }
        Command::Resolve {
            family,
            variant,
            dark,
        } => {
            let out = provide_store(ThemeStore::shared(), || -> Result<String> {
                let theme = use_theme()?;
                if config.theme.wants_dark(dark) && !theme.is_dark_mode() {
                    theme.toggle();
                }
                let styles = use_style_accessor()?;
                let value = render::resolve(&styles, family, variant.as_deref())?;
                render::render_resolved(
                    &value,
                    family,
                    variant.as_deref(),
                    theme.scheme(),
                    format,
                )
            })?;
            println!("{out}");
        }
        Command::Export { out, prefix } => {
            let prefix = prefix.unwrap_or(config.css.prefix);
            let format = match cli.format {
                Some(f) => f,
                // Exports default to CSS unless the config asks otherwise
                None if config.output.format == OutputFormat::Text => OutputFormat::Css,
                None => config.output.format,
            };
            let rendered = render::render_export(format, &prefix)?;
            match out {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("wrote {:?} export to {}", format, path.display());
                }
                None => print!("{rendered}"),
            }
        }
        Command::Init { force } => {
            if cli.config.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite it.",
                    cli.config.display()
                );
            }
            fs::write(&cli.config, AstroConfig::default().to_toml()?)
                .with_context(|| format!("Failed to write {}", cli.config.display()))?;
            tracing::info!("created {}", cli.config.display());
        }
    }

    Ok(())
}
