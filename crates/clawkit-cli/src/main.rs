//! Clawkit CLI - Clawdbot Arena tooling frontend
//!
//! Two jobs: slice the combined art drop into game-ready assets, and render
//! the two pitch decks to PDF.

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// Clawkit - Clawdbot Arena asset and presentation tooling
#[derive(Parser)]
#[command(name = "clawkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract assets from the combined sheet
    Extract {
        /// Combined asset sheet image
        #[arg(short, long, default_value = "game-assets.jpg")]
        source: String,

        /// Asset output root
        #[arg(short, long, default_value = "public/assets")]
        out_dir: String,
    },

    /// Render a presentation deck
    Deck {
        /// Which deck to render
        #[arg(value_enum)]
        variant: DeckVariant,

        /// Output file (defaults to the deck's standard filename)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "pdf")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum DeckVariant {
    /// Product overview deck
    Product,
    /// v2 technical deck (Castle Crashers edition)
    ArenaV2,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Multi-page PDF
    Pdf,
    /// Page list as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Extract { source, out_dir } => {
            commands::extract::run(&source, &out_dir)?;
        }

        Commands::Deck {
            variant,
            output,
            format,
        } => {
            commands::deck::run(variant, output.as_deref(), format)?;
        }
    }

    Ok(())
}
