//! WhatsApp TXT transcript parser.
//!
//! Reconstructs logical messages from the line-based export format, where a
//! single message may span multiple physical lines and timestamps appear in
//! several date/time encodings.
//!
//! Recognized header shape:
//!
//! ```text
//! 1/1/24, 10:00 AM - Alice: Hi
//! 15/01/2024, 10:30 - Bob: Hello
//! ```
//!
//! Lines that do not start a new message are continuations of the previous
//! one. A line that *looks* like a header but whose date fails every
//! supported encoding is also a continuation, not an error.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::Message;
use crate::error::Result;

/// Header grammar: `<date>, <time> - <sender>: <text>`.
///
/// Date is D/M/YYYY or D/M/YY, time is H:MM with an optional AM/PM marker,
/// sender is everything up to the first colon, text is the rest of the line.
const HEADER_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?:\s?[APMapm]{2})?)\s*-\s*([^:]+):\s*(.*)";

/// Supported date/time encodings, tried in fixed priority order.
///
/// The order is a contract: first success wins, and 12-hour encodings are
/// tried before 24-hour ones. The bool marks encodings that expect a
/// 4-digit year.
const DATE_FORMATS: [(&str, bool); 4] = [
    ("%d/%m/%Y %I:%M %p", true),
    ("%d/%m/%y %I:%M %p", false),
    ("%d/%m/%Y %H:%M", true),
    ("%d/%m/%y %H:%M", false),
];

/// Parser for WhatsApp TXT transcript exports.
///
/// # Example
///
/// ```rust
/// use chatsum::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let messages =
///     parser.parse_str("1/1/24, 10:00 AM - Alice: Hi\nhow are you");
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].text, "Hi how are you");
/// ```
pub struct TranscriptParser {
    header: Regex,
}

impl TranscriptParser {
    /// Creates a new parser with the header grammar compiled.
    pub fn new() -> Self {
        Self {
            header: Regex::new(HEADER_PATTERN).unwrap(),
        }
    }

    /// Parses a transcript file into an ordered sequence of messages.
    ///
    /// # Errors
    ///
    /// Only I/O errors are possible; malformed transcript content never
    /// fails, it degrades to fewer (possibly zero) messages.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses transcript content into an ordered sequence of messages.
    ///
    /// Two-state machine over the lines: either no message is open, or one
    /// message is accumulating continuation text. Each line is classified
    /// once, as header-with-valid-date or everything-else.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut current: Option<Message> = None;

        for line in content.lines() {
            if let Some(caps) = self.header.captures(line) {
                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map_or("", |m| m.as_str());
                let text = caps.get(4).map_or("", |m| m.as_str());

                if let Some(timestamp) = parse_timestamp(date_str, time_str) {
                    if let Some(done) = current.take() {
                        messages.push(done);
                    }
                    current = Some(Message::new(timestamp, sender, text));
                    continue;
                }
                // Header-shaped line with an impossible date: falls through
                // to continuation handling, it must not start a message.
            }

            if let Some(msg) = current.as_mut() {
                msg.text.push(' ');
                msg.text.push_str(line);
            }
            // No open message: leading garbage, dropped.
        }

        if let Some(done) = current {
            messages.push(done);
        }

        messages
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Tries the supported encodings in priority order against `"<date> <time>"`.
///
/// chrono's `%Y` happily parses 2-digit years as year 24 AD, which would
/// shadow the `%y` encodings for inputs like `1/2/24`. The year token's
/// width decides which encodings are applicable; priority order is kept
/// within each width.
fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let four_digit_year = date_str.rsplit('/').next().is_some_and(|y| y.len() == 4);
    let stamp = format!("{date_str} {time_str}");

    for (format, wide) in DATE_FORMATS {
        if wide != four_digit_year {
            continue;
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&stamp, format) {
            return Some(dt);
        }
    }

    None
}
