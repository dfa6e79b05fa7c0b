//! The message record reconstructed from a transcript.
//!
//! This module provides [`Message`], the fixed-shape record the transcript
//! parser emits. Unlike loosely-typed chat exports, every field is always
//! present: a message only comes into existence once its header line has
//! been recognized with a fully parsed timestamp.
//!
//! # Examples
//!
//! ```
//! use chatsum::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hi how are you");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.as_line(), "Alice: Hi how are you");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single reconstructed chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Date and time-of-day, no timezone |
/// | `sender` | `String` | Author label, captured verbatim from the header |
/// | `text` | `String` | Message body; continuation lines joined with spaces |
///
/// The timestamp is naive on purpose: WhatsApp exports carry no timezone,
/// so the values are taken as local wall-clock time.
///
/// A message is immutable once emitted by the parser; records appear in the
/// output in the same relative order as their headers appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent (naive local time).
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    ///
    /// Captured as-is from the header line. A sender label that itself
    /// contains a colon mis-splits at the first colon; that is inherited
    /// export-format behavior, not corrected here.
    pub sender: String,

    /// Text content of the message.
    ///
    /// May span multiple physical lines in the export; those are joined
    /// with a single space, in original order.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the timestamp.
    ///
    /// This is the granularity used by range filtering; the time-of-day
    /// component is ignored for comparisons.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the sender label.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the message as a `sender: text` line.
    ///
    /// This is the shape the summarization payload is built from.
    pub fn as_line(&self) -> String {
        format!("{}: {}", self.sender, self.text)
    }

    /// Returns `true` if this message's text is empty or whitespace-only.
    ///
    /// Legitimately possible: the header grammar guarantees a body capture,
    /// which may be the empty string.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.sender,
            self.text
        )
    }
}
