//! dict2anki - create Anki cards from Merriam-Webster definitions.
//!
//! Looks up a single word, prints the definition, and inserts it as a Basic
//! note into a configured deck via the AnkiConnect add-on, skipping words
//! that already have a card in that deck.

mod anki;
mod config;
mod dictionary;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use anki::{AnkiClient, Note};
use config::Config;
use dictionary::DictionaryClient;

/// Command line interface.
#[derive(Parser, Debug)]
#[command(name = "dict2anki")]
#[command(version, about = "Quickly create Anki cards from words", long_about = None)]
#[command(after_help = "Requires a Merriam-Webster API key and a deck name in \
~/.config/dict2anki/config.json, and a running Anki instance with the AnkiConnect add-on.")]
struct Cli {
    /// Word to look up and turn into a card
    word: String,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if cli.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    if let Err(e) = run(&cli.word).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Run the fetch -> print -> dedupe -> insert workflow for one word.
async fn run(word: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    let anki = AnkiClient::new();
    anki.ping()
        .await
        .context("Failed to connect to Anki. Is it running? Does it have AnkiConnect?")?;

    let dictionary = DictionaryClient::new(&config.api_key);
    let card = dictionary
        .fetch_definition(word)
        .await
        .context("Failed to fetch the definition from Merriam-Webster")?;

    println!("{}", card.word);
    println!("{}", card.part_of_speech);
    println!("{}", card.definitions.join("\n"));

    let duplicate = anki
        .has_duplicate(&config.deck_name, &card.word)
        .await
        .context("Failed to query the deck for duplicates")?;

    if duplicate {
        println!("Duplicate detected, omitting.");
        return Ok(());
    }

    let note = Note::basic(&config.deck_name, card.front_text(), card.back_text());
    let note_id = anki.add_note(&note).await.context("Failed to add the card to the deck")?;
    debug!("Added note {} to deck {}", note_id, config.deck_name);

    println!("Done.");
    Ok(())
}
