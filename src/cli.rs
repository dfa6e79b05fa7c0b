//! Command-line interface definition using clap.

use clap::Parser;

/// Parse an exported WhatsApp chat and summarize a date range with an LLM.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsum")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsum chat.txt
    chatsum chat.txt --from 2024-01-01 --to 2024-01-31
    chatsum chat.txt --preview 25
    chatsum chat.txt --summarize
    chatsum chat.txt --summarize --model gpt-4o")]
pub struct Args {
    /// Path to the exported chat transcript (.txt)
    pub input: String,

    /// Start of the date range, inclusive (YYYY-MM-DD).
    /// Defaults to the date of the first parsed message.
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the date range, inclusive (YYYY-MM-DD).
    /// Defaults to the date of the last parsed message.
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Number of filtered messages to print as a preview
    #[arg(short, long, default_value_t = 10, value_name = "N")]
    pub preview: usize,

    /// Generate a summary of the filtered messages
    #[arg(short, long)]
    pub summarize: bool,

    /// Model to use for summarization
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API key for the summarization endpoint.
    /// Defaults to the OPENAI_API_KEY environment variable.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}
