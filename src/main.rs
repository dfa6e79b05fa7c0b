//! # chatsum CLI
//!
//! Command-line interface for the chatsum library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatsum::cli::Args;
use chatsum::filter::{DateRange, filter_by_range};
use chatsum::summary::{OpenAiClient, OpenAiConfig};
use chatsum::{ChatsumError, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsumError> {
    let args = Args::parse();

    let parser = TranscriptParser::new();
    let messages = parser.parse(Path::new(&args.input))?;
    println!("Loaded {} messages from {}", messages.len(), args.input);

    if messages.is_empty() {
        println!("Nothing to do: no messages parsed.");
        return Ok(());
    }

    let range = resolve_range(&args, &messages)?;
    println!("Range:  {}", range);

    let filtered = filter_by_range(messages, &range);
    println!("Filtered {} messages", filtered.len());

    if args.preview > 0 {
        println!();
        for msg in filtered.iter().take(args.preview) {
            println!("{}", msg);
        }
        if filtered.len() > args.preview {
            println!("... and {} more", filtered.len() - args.preview);
        }
        println!();
    }

    if args.summarize {
        if filtered.is_empty() {
            println!("No messages in range; skipping summary.");
            return Ok(());
        }

        let mut config = match &args.api_key {
            Some(key) => OpenAiConfig::new(key),
            None => OpenAiConfig::from_env()?,
        };
        if let Some(ref model) = args.model {
            config = config.with_model(model);
        }

        let client = OpenAiClient::new(config)?;
        println!("Generating summary...");
        let summary = client.summarize(&filtered, &range)?;

        println!();
        println!("{}", summary);
    }

    Ok(())
}

/// Builds the date range from the CLI bounds, falling back to the dates of
/// the first and last parsed message for whichever side is missing.
///
/// An inverted result (explicit or from a transcript whose timestamps
/// regress) is rejected here, before filtering.
fn resolve_range(args: &Args, messages: &[chatsum::Message]) -> Result<DateRange, ChatsumError> {
    // messages is non-empty here
    let start = match &args.from {
        Some(s) => parse_bound(s)?,
        None => messages[0].date(),
    };
    let end = match &args.to {
        Some(s) => parse_bound(s)?,
        None => messages[messages.len() - 1].date(),
    };
    DateRange::new(start, end)
}

fn parse_bound(input: &str) -> Result<chrono::NaiveDate, ChatsumError> {
    chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ChatsumError::invalid_date(input))
}
