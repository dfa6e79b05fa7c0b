//! Summarization: prompt building plus the remote client.
//!
//! The prompt side is pure and local: it caps the message list, renders
//! `sender: text` lines, and wraps them in the summary instructions. The
//! client side ([`client::OpenAiClient`]) performs a single blocking
//! request against an OpenAI-compatible chat completions endpoint.
//!
//! Remote failures propagate unmasked; there is no retry and no fallback
//! content.

pub mod client;
pub mod models;

pub use client::{OpenAiClient, OpenAiConfig};

use crate::Message;
use crate::filter::DateRange;

/// Maximum number of messages included in a summarization request.
///
/// The producer truncates before handing off, to bound request size.
pub const SAMPLE_LIMIT: usize = 300;

/// Renders the message block for the prompt: `sender: text` per line,
/// newline-joined, capped at [`SAMPLE_LIMIT`] messages.
pub fn build_chat_block(messages: &[Message]) -> String {
    messages
        .iter()
        .take(SAMPLE_LIMIT)
        .map(Message::as_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full summarization prompt for a message subsequence and the
/// date range it was filtered to.
pub fn build_prompt(messages: &[Message], range: &DateRange) -> String {
    format!(
        "You are an AI that summarizes WhatsApp group chats clearly.\n\
         \n\
         Summarize the messages between {start} and {end}.\n\
         Group messages by participant and highlight main discussion points.\n\
         \n\
         Return the result in this format:\n\
         **Main Topics:**\n\
         - ...\n\
         \n\
         **By Participants:**\n\
         - Name: key points (1-3 short bullets)\n\
         \n\
         **Decisions / Actions:**\n\
         - ...\n\
         \n\
         Messages:\n\
         {block}\n",
        start = range.start(),
        end = range.end(),
        block = build_chat_block(messages),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_msg(day: u32, sender: &str, text: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Message::new(ts, sender, text)
    }

    #[test]
    fn test_chat_block_lines() {
        let messages = vec![make_msg(1, "Alice", "Hi"), make_msg(1, "Bob", "Hello")];
        assert_eq!(build_chat_block(&messages), "Alice: Hi\nBob: Hello");
    }

    #[test]
    fn test_chat_block_caps_at_sample_limit() {
        let messages: Vec<Message> = (0..SAMPLE_LIMIT + 50)
            .map(|i| make_msg(1, "Alice", &format!("message {i}")))
            .collect();

        let block = build_chat_block(&messages);
        assert_eq!(block.lines().count(), SAMPLE_LIMIT);
        assert!(block.ends_with(&format!("message {}", SAMPLE_LIMIT - 1)));
    }

    #[test]
    fn test_chat_block_empty() {
        assert_eq!(build_chat_block(&[]), "");
    }

    #[test]
    fn test_prompt_contains_range_and_messages() {
        let messages = vec![make_msg(1, "Alice", "Hi"), make_msg(2, "Bob", "Bye")];
        let range = DateRange::parse("2024-01-01", "2024-01-02").unwrap();

        let prompt = build_prompt(&messages, &range);
        assert!(prompt.contains("between 2024-01-01 and 2024-01-02"));
        assert!(prompt.contains("Alice: Hi"));
        assert!(prompt.contains("Bob: Bye"));
        assert!(prompt.contains("**Main Topics:**"));
        assert!(prompt.contains("**By Participants:**"));
        assert!(prompt.contains("**Decisions / Actions:**"));
    }
}
