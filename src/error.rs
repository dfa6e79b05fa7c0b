//! Unified error types for chatsum.
//!
//! This module provides a single [`ChatsumError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Transcript parsing never fails**: lines that cannot be interpreted as
//!   message headers degrade to continuation text or are dropped, so the
//!   parser has no error variant at all.
//! - **Validation errors** (bad dates, inverted ranges) are surfaced to the
//!   caller before any filtering happens.
//! - **Remote summarization errors** are propagated as-is, with a typed
//!   taxonomy callers can match on. There is no retry or fallback content.

use std::io;

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized [`Result`] type for chatsum operations.
///
/// # Example
///
/// ```rust
/// use chatsum::error::Result;
/// use chatsum::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsumError>;

/// The error type for all chatsum operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsumError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript file doesn't exist or
    /// cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid date string in a range bound.
    ///
    /// Range bounds expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An inverted date range (`start > end`).
    ///
    /// Rejected before filtering; the filter itself assumes a valid range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start date
        start: NaiveDate,
        /// Requested end date
        end: NaiveDate,
    },

    /// Remote summarization failure.
    ///
    /// Wraps the typed taxonomy of things that can go wrong when talking to
    /// the chat completions endpoint: auth, quota, rate limits, network,
    /// server errors, or a response the client cannot interpret.
    #[cfg(feature = "summarize")]
    #[error("Summarization error: {0}")]
    Api(#[source] ApiErrorKind),
}

/// Kinds of remote summarization errors.
#[cfg(feature = "summarize")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Authentication failed (HTTP 401, or 403 without a quota hint).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// Quota exhausted (HTTP 403 mentioning quota, or billing errors).
    #[error("quota exceeded: {0}")]
    Quota(String),

    /// The request timed out.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Transport-level failure (DNS, connection refused, TLS).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The service returned a 5xx status.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The response body was not valid JSON for the expected schema.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The response was structurally valid but carried no usable text.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side configuration problem (missing API key, bad base URL).
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(feature = "summarize")]
impl ApiErrorKind {
    /// Maps a transport error from reqwest to the taxonomy.
    pub fn from_transport(err: reqwest::Error, timeout: std::time::Duration) -> Self {
        if err.is_timeout() {
            ApiErrorKind::Timeout(timeout)
        } else {
            ApiErrorKind::Network(err)
        }
    }

    /// Maps a non-success HTTP status plus body to the taxonomy.
    ///
    /// The body is used verbatim as the message; OpenAI-style
    /// `{"error": {"message": ...}}` envelopes are unwrapped when present.
    pub fn from_status_and_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            401 => ApiErrorKind::Auth(message),
            403 => {
                if message.to_lowercase().contains("quota") {
                    ApiErrorKind::Quota(message)
                } else {
                    ApiErrorKind::Auth(message)
                }
            }
            429 => ApiErrorKind::RateLimit(message),
            s @ 500..=599 => ApiErrorKind::Server { status: s, message },
            s => ApiErrorKind::InvalidResponse(format!("HTTP {s}: {message}")),
        }
    }

    /// Returns `true` if this is an authentication error.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiErrorKind::Auth(_))
    }

    /// Returns `true` if this is a rate-limit or quota error.
    pub fn is_capacity(&self) -> bool {
        matches!(self, ApiErrorKind::RateLimit(_) | ApiErrorKind::Quota(_))
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsumError {
    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatsumError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an inverted-range error.
    pub fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        ChatsumError::InvalidDateRange { start, end }
    }

    /// Creates a summarization error from an [`ApiErrorKind`].
    #[cfg(feature = "summarize")]
    pub fn api(kind: ApiErrorKind) -> Self {
        ChatsumError::Api(kind)
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsumError::Io(_))
    }

    /// Returns `true` if this is a date-format error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatsumError::InvalidDate { .. })
    }

    /// Returns `true` if this is an inverted-range error.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, ChatsumError::InvalidDateRange { .. })
    }

    /// Returns `true` if this is a remote summarization error.
    #[cfg(feature = "summarize")]
    pub fn is_api(&self) -> bool {
        matches!(self, ChatsumError::Api(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
