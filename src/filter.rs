//! Filter messages by an inclusive calendar-date range.
//!
//! This module provides [`DateRange`] for validated range bounds and
//! [`filter_by_range`] for selecting the date-bounded subsequence of a
//! message list.
//!
//! Comparison is date-only: a message's time-of-day component is ignored.
//!
//! # Examples
//!
//! ```
//! use chatsum::filter::{DateRange, filter_by_range};
//! use chatsum::TranscriptParser;
//!
//! # fn main() -> chatsum::Result<()> {
//! let messages = TranscriptParser::new().parse_str(
//!     "1/1/24, 10:00 AM - Alice: one\n\
//!      2/1/24, 10:00 AM - Bob: two\n\
//!      3/1/24, 10:00 AM - Alice: three",
//! );
//!
//! let range = DateRange::parse("2024-01-01", "2024-01-02")?;
//! let filtered = filter_by_range(messages, &range);
//! assert_eq!(filtered.len(), 2);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::Message;
use crate::error::{ChatsumError, Result};

/// An inclusive calendar-date range.
///
/// Construction rejects inverted ranges (`start > end`); once a `DateRange`
/// exists it is always valid, so the filtering loop never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsumError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ChatsumError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Creates a range from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsumError::InvalidDate`] if either string doesn't parse,
    /// or [`ChatsumError::InvalidDateRange`] if the range is inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Returns the range spanned by a message sequence, first to last.
    ///
    /// `None` for an empty sequence. Messages are taken in source order, so
    /// a transcript whose timestamps regress can still produce an inverted
    /// pair; that case also yields `None`.
    pub fn spanning(messages: &[Message]) -> Option<Self> {
        let first = messages.first()?.date();
        let last = messages.last()?.date();
        Self::new(first, last).ok()
    }

    /// Returns the inclusive start date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the inclusive end date.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` falls within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ChatsumError::invalid_date(input))
}

/// Selects the subsequence of messages whose date falls within the range.
///
/// Order is preserved; an empty input yields an empty output. This consumes
/// the input vector, matching how the parser output flows through the
/// pipeline exactly once.
pub fn filter_by_range(messages: Vec<Message>, range: &DateRange) -> Vec<Message> {
    messages
        .into_iter()
        .filter(|msg| range.contains(msg.date()))
        .collect()
}
