//! # Chatsum
//!
//! A Rust library for parsing exported WhatsApp chat transcripts into
//! structured, timestamped message records, filtering them to a date range,
//! and summarizing the result with an LLM.
//!
//! ## Overview
//!
//! The heart of the crate is the transcript parser: a line-oriented state
//! machine that reconstructs logical messages from the line-based export
//! format, where a single message may span multiple physical lines and
//! timestamps appear in several date/time encodings. Downstream of the
//! parser, the date-range filter and the summarization client are simple,
//! mechanical consumers of its output.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsum::TranscriptParser;
//! use chatsum::filter::{DateRange, filter_by_range};
//!
//! # fn main() -> chatsum::Result<()> {
//! let parser = TranscriptParser::new();
//! let messages = parser.parse_str(
//!     "1/1/24, 10:00 AM - Alice: Hi\n\
//!      how are you\n\
//!      1/1/24, 10:05 AM - Bob: Good thanks",
//! );
//! assert_eq!(messages.len(), 2);
//!
//! let range = DateRange::parse("2024-01-01", "2024-01-01")?;
//! let filtered = filter_by_range(messages, &range);
//! assert_eq!(filtered.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Summarization
//!
//! With the `summarize` feature (default), an explicitly constructed
//! client sends one blocking request to an OpenAI-compatible endpoint:
//!
//! ```rust,no_run
//! use chatsum::filter::DateRange;
//! use chatsum::summary::{OpenAiClient, OpenAiConfig};
//!
//! # fn main() -> chatsum::Result<()> {
//! # let messages = vec![];
//! let client = OpenAiClient::new(OpenAiConfig::from_env()?)?;
//! let range = DateRange::parse("2024-01-01", "2024-01-31")?;
//! let summary = client.summarize(&messages, &range)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] — [`Message`], the fixed-shape record type
//! - [`parser`] — [`TranscriptParser`], the line-oriented state machine
//! - [`filter`] — [`DateRange`](filter::DateRange),
//!   [`filter_by_range`](filter::filter_by_range)
//! - [`summary`] — prompt building and the blocking chat completions
//!   client (feature `summarize`)
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — unified error types ([`ChatsumError`], [`Result`])

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod filter;
pub mod message;
pub mod parser;
#[cfg(feature = "summarize")]
pub mod summary;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsumError, Result};
pub use message::Message;
pub use parser::TranscriptParser;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatsumError, Result};
    pub use crate::filter::{DateRange, filter_by_range};
    pub use crate::parser::TranscriptParser;
    #[cfg(feature = "summarize")]
    pub use crate::summary::{OpenAiClient, OpenAiConfig, SAMPLE_LIMIT};
}
