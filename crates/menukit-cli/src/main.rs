//! Menukit CLI - normalize menu payloads and query the resulting catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use menukit_index::DietFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;
mod payload;
mod registry;

use commands::{categories, find, items, normalize, nutrition, price, resolve_image, slugify};

#[derive(Parser)]
#[command(name = "menukit")]
#[command(about = "Menu catalog normalization and lookup CLI")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(long, global = true, default_value = "menukit.toml")]
    config: PathBuf,
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a payload and print the catalog as JSON
    Normalize {
        /// Payload JSON file ("-" for stdin)
        payload: String,
        /// Include the normalization report
        #[arg(long)]
        report: bool,
    },
    /// List categories with item counts and cover thumbnails
    Categories {
        /// Payload JSON file ("-" for stdin)
        payload: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the items of one category
    Items {
        /// Payload JSON file ("-" for stdin)
        payload: String,
        /// Category id, slug, or name
        category: String,
        /// Case-insensitive search over name and description
        #[arg(long)]
        query: Option<String>,
        /// Diet filter: all, veg, nonveg
        #[arg(long, default_value = "all")]
        diet: DietFilter,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up one item and print it as JSON
    Find {
        /// Payload JSON file ("-" for stdin)
        payload: String,
        /// Category id, slug, or name
        category: String,
        /// Item id, slug, or name
        item: String,
    },
    /// Resolve an image reference against the configured assets
    ResolveImage {
        /// Image reference as found in a payload
        reference: String,
        /// Resolve for list views (small variants only)
        #[arg(long)]
        thumbnail: bool,
    },
    /// Normalize a raw price value
    Price {
        /// Raw price: a number or a formatted string such as "₹1,234.50"
        raw: String,
        /// Numeric input is in minor units (paise, cents)
        #[arg(long)]
        minor: bool,
    },
    /// Extract nutrition facts
    Nutrition {
        /// Structured nutrition object as JSON
        #[arg(long)]
        structured: Option<String>,
        /// Free-text description to scan
        #[arg(long)]
        text: Option<String>,
    },
    /// Print the URL-safe slug of a string
    Slugify {
        /// Text to slugify
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Normalize { payload, report } => normalize::run(payload, report),
        Commands::Categories { payload, json } => categories::run(&cli.config, payload, json),
        Commands::Items {
            payload,
            category,
            query,
            diet,
            json,
        } => items::run(payload, category, query, diet, json),
        Commands::Find {
            payload,
            category,
            item,
        } => find::run(&cli.config, payload, category, item),
        Commands::ResolveImage {
            reference,
            thumbnail,
        } => resolve_image::run(&cli.config, reference, thumbnail),
        Commands::Price { raw, minor } => price::run(raw, minor),
        Commands::Nutrition { structured, text } => nutrition::run(structured, text),
        Commands::Slugify { text } => slugify::run(text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Installs the stderr subscriber; stdout stays reserved for command output.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
