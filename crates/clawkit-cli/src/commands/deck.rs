//! Deck command

use crate::{DeckVariant, OutputFormat};
use clawkit_backend_pdf::write_deck;
use clawkit_deck::decks::{arena_v2, product};
use std::fs;
use tracing::info;

pub fn run(
    variant: DeckVariant,
    output: Option<&str>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (title, default_output, pages) = match variant {
        DeckVariant::Product => (product::TITLE, product::DEFAULT_OUTPUT, product::pages()),
        DeckVariant::ArenaV2 => (arena_v2::TITLE, arena_v2::DEFAULT_OUTPUT, arena_v2::pages()),
    };

    info!(pages = pages.len(), "built deck: {title}");

    match format {
        OutputFormat::Pdf => {
            let path = output.unwrap_or(default_output);
            write_deck(title, &pages, path)?;
            println!("Generated: {path}");
        }

        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&pages)?;
            match output {
                Some(path) => {
                    fs::write(path, &json)?;
                    println!("Deck JSON written to {path}");
                }
                None => {
                    println!("{json}");
                }
            }
        }
    }

    Ok(())
}
