//! Blocking client for an OpenAI-compatible chat completions endpoint.
//!
//! The whole pipeline is single-threaded and synchronous, so the client
//! performs one blocking request per summary. The only tunable beyond
//! credentials is a request timeout; there is no retry, rate limiting, or
//! cancellation.
//!
//! The client is an explicitly constructed value the caller passes around.
//! Environment credentials are read only in [`OpenAiConfig::from_env`],
//! which the caller invokes; nothing reads the environment ambiently.

use std::time::Duration;

use crate::Message;
use crate::error::{ApiErrorKind, ChatsumError, Result};
use crate::filter::DateRange;
use crate::summary::build_prompt;
use crate::summary::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Environment variable holding the API key for [`OpenAiConfig::from_env`].
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the summarization client.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration from the `OPENAI_API_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            return Err(ChatsumError::api(ApiErrorKind::Configuration(format!(
                "{API_KEY_ENV} is not set"
            ))));
        }
        Ok(Self::new(api_key))
    }

    /// Sets the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the endpoint base URL (useful for proxies and compatible APIs).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty API key, base URL, or
    /// model name.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(configuration("API key is required"));
        }
        if self.base_url.is_empty() {
            return Err(configuration("base URL cannot be empty"));
        }
        if self.model.is_empty() {
            return Err(configuration("model name cannot be empty"));
        }
        Ok(())
    }
}

fn configuration(message: &str) -> ChatsumError {
    ChatsumError::api(ApiErrorKind::Configuration(message.to_string()))
}

/// Client for the summarization service.
///
/// # Example
///
/// ```rust,no_run
/// use chatsum::summary::{OpenAiClient, OpenAiConfig};
/// use chatsum::filter::DateRange;
///
/// # fn main() -> chatsum::Result<()> {
/// let client = OpenAiClient::new(OpenAiConfig::from_env()?)?;
/// let range = DateRange::parse("2024-01-01", "2024-01-31")?;
/// let summary = client.summarize(&[], &range)?;
/// # Ok(())
/// # }
/// ```
pub struct OpenAiClient {
    config: OpenAiConfig,
    http: reqwest::blocking::Client,
}

impl OpenAiClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ChatsumError::api(ApiErrorKind::Configuration(format!(
                    "failed to create HTTP client: {e}"
                )))
            })?;

        Ok(Self { config, http })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Summarizes a message subsequence over the given date range.
    ///
    /// Builds the prompt (capped to the first
    /// [`SAMPLE_LIMIT`](crate::summary::SAMPLE_LIMIT) messages) and sends a
    /// single blocking request. Callers are expected to skip the call for an
    /// empty subsequence; the client itself does not special-case it.
    ///
    /// # Errors
    ///
    /// Any remote failure (auth, quota, rate limit, network, server, or a
    /// response with no usable text) propagates as
    /// [`ChatsumError::Api`].
    pub fn summarize(&self, messages: &[Message], range: &DateRange) -> Result<String> {
        let prompt = build_prompt(messages, range);
        self.complete(&prompt)
    }

    /// Sends a single-turn completion request and returns the response text.
    pub fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatCompletionRequest::user(&self.config.model, prompt);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                ChatsumError::api(ApiErrorKind::from_transport(e, self.config.timeout))
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            ChatsumError::api(ApiErrorKind::from_transport(e, self.config.timeout))
        })?;

        if !status.is_success() {
            return Err(ChatsumError::api(ApiErrorKind::from_status_and_body(
                status, &body,
            )));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ChatsumError::api(ApiErrorKind::Parse(e.to_string())))?;

        parsed.extract_text().map(str::to_string).ok_or_else(|| {
            ChatsumError::api(ApiErrorKind::InvalidResponse(
                "no text content in response".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_config_validation() {
        assert!(OpenAiConfig::new("valid-key").validate().is_ok());

        let err = OpenAiConfig::new("").validate().unwrap_err();
        assert!(err.is_api());

        let err = OpenAiConfig::new("key")
            .with_model("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("model"));

        let err = OpenAiConfig::new("key")
            .with_base_url("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("base URL"));
    }

    #[test]
    fn test_config_builders() {
        let config = OpenAiConfig::new("key")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_client_rejects_empty_key() {
        assert!(OpenAiClient::new(OpenAiConfig::new("")).is_err());
    }

    #[test]
    fn test_client_keeps_config() {
        let client = OpenAiClient::new(OpenAiConfig::new("key").with_model("gpt-4o")).unwrap();
        assert_eq!(client.config().model, "gpt-4o");
    }
}
