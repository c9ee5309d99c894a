//! CLI entry point for blog-pages

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-pages")]
#[command(version)]
#[command(about = "Generate keyword-driven blog pages and a sitemap", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the keyword sheet (CSV) into the keywords file (JSON)
    Convert {
        /// CSV file to read (defaults to the configured csv_file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON file to write (defaults to the configured keywords_file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assign random recent publish dates to undated entries
    Dates,

    /// Generate one HTML page per entry with content
    #[command(alias = "g")]
    Generate,

    /// Write sitemap.xml
    Sitemap,

    /// Run dates, generate and sitemap in sequence
    Build,

    /// List keyword entries
    List {
        /// Entries to list (all, pages, pending)
        #[arg(default_value = "all")]
        r#type: String,
    },

    /// Remove generated pages and the sitemap
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_pages=debug,info"
    } else {
        "blog_pages=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let site = blog_pages::Site::new(&base_dir)?;

    match cli.command {
        Commands::Convert { input, output } => {
            tracing::info!("Converting keyword sheet...");
            blog_pages::commands::convert::run(&site, input.as_deref(), output.as_deref())?;
        }

        Commands::Dates => {
            site.backfill_dates()?;
        }

        Commands::Generate => {
            tracing::info!("Generating pages...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Sitemap => {
            site.sitemap()?;
        }

        Commands::Build => {
            tracing::info!("Building site...");
            site.build()?;
            println!("Built successfully!");
        }

        Commands::List { r#type } => {
            blog_pages::commands::list::run(&site, r#type.parse()?)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning generated pages...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
