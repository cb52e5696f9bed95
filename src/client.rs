use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::batch::{BatchItem, BatchOptions, BatchResult};
use crate::config::{ClientAuth, ClientConfig, ConfigUpdate, DEFAULT_BATCH_DELAY_MS, MaskedConfig};
use crate::emoji::EmojiInput;
use crate::error::{Error, Result};
use crate::validate::validate_url;

/// Fixed production endpoint for the reaction API
pub const API_URL: &str = "https://nieve-wachrs.vercel.app";

/// Client identifier sent with every request
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// JSON request body for a single reaction
#[derive(Debug, Serialize)]
struct ReactionRequest<'a> {
    url: &'a str,
    emojis: &'a str,
}

/// Options for [`ReactionClient::send_reaction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SendOptions {
    /// Per-call timeout override in milliseconds. Zero counts as
    /// unspecified; both fall back to the client's configured timeout.
    pub timeout_ms: Option<u64>,
}

/// Client for sending reactions to WhatsApp Channel posts.
///
/// Holds the API key and timing configuration, validates inputs, and
/// performs the HTTP calls against the reaction endpoint. All requests are
/// strictly sequential; batch mode inserts a delay between them.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> nvrch::Result<()> {
/// let client = nvrch::ReactionClient::new("KEY123")?;
/// let response = client
///     .send_reaction(
///         "https://whatsapp.com/channel/0029VbAzDjIBFLgbEyadQb3y/178",
///         "👍",
///         Default::default(),
///     )
///     .await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
pub struct ReactionClient {
    http: reqwest::Client,
    endpoint: Url,
    config: ClientConfig,
}

impl ReactionClient {
    /// Create a client from an API key or a [`ClientConfig`].
    ///
    /// Fails with [`Error::Configuration`] when the key is empty after
    /// trimming or the HTTP client cannot be built.
    pub fn new(auth: impl Into<ClientAuth>) -> Result<Self> {
        let endpoint = Url::parse(API_URL)
            .map_err(|err| Error::Configuration(format!("invalid endpoint URL: {err}")))?;
        Self::with_endpoint(auth, endpoint)
    }

    /// Create a client pointed at a custom endpoint instead of [`API_URL`].
    ///
    /// Intended for self-hosted deployments and tests against a local mock
    /// server.
    pub fn with_endpoint(auth: impl Into<ClientAuth>, endpoint: Url) -> Result<Self> {
        let config = auth.into().into_config()?;

        let http = reqwest::ClientBuilder::new()
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|err| Error::Configuration(format!("building HTTP client: {err}")))?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// Get the current configuration with the API key masked.
    pub fn get_config(&self) -> MaskedConfig {
        MaskedConfig {
            api_key: "***".to_string(),
            timeout_ms: self.config.timeout_ms,
            delay_ms: self.config.delay_ms,
        }
    }

    /// Apply a partial configuration update.
    ///
    /// Zero timeouts/delays and blank API keys are ignored silently rather
    /// than rejected.
    pub fn set_config(&mut self, update: ConfigUpdate) {
        if let Some(timeout_ms) = update.timeout_ms
            && timeout_ms > 0
        {
            self.config.timeout_ms = timeout_ms;
        }

        if let Some(delay_ms) = update.delay_ms
            && delay_ms > 0
        {
            self.config.delay_ms = Some(delay_ms);
        }

        if let Some(api_key) = update.api_key {
            let api_key = api_key.trim();
            if !api_key.is_empty() {
                self.config.api_key = api_key.to_string();
            }
        }
    }

    /// Send a reaction to a single channel post.
    ///
    /// Validates the URL and emoji input, performs exactly one POST with
    /// the configured authorization, and returns the server's JSON body
    /// unchanged. Nothing is retried.
    ///
    /// # Arguments
    ///
    /// * `url` - The channel post URL (`https://whatsapp.com/channel/{channelId}/{postId}`)
    /// * `emojis` - A single emoji, a comma-separated string, or a list
    /// * `options` - Optional per-call timeout override
    pub async fn send_reaction(
        &self,
        url: &str,
        emojis: impl Into<EmojiInput>,
        options: SendOptions,
    ) -> Result<Value> {
        if url.is_empty() {
            return Err(Error::Validation(
                "channel post URL must be provided".to_string(),
            ));
        }

        let emojis = emojis.into();
        if emojis.is_unset() {
            return Err(Error::Validation("emoji must be provided".to_string()));
        }

        if !validate_url(url) {
            return Err(Error::Validation(format!(
                "invalid WhatsApp Channel URL: {url}. Expected format: \
                 https://whatsapp.com/channel/{{channelId}}/{{postId}}, \
                 e.g. https://whatsapp.com/channel/0029VbAzDjIBFLgbEyadQb3y/178"
            )));
        }

        let emojis = emojis.normalize()?;
        let body = ReactionRequest {
            url: url.trim(),
            emojis: &emojis,
        };

        // A zero override counts as unspecified, like everywhere else
        let timeout = Duration::from_millis(
            options
                .timeout_ms
                .filter(|&timeout_ms| timeout_ms > 0)
                .unwrap_or(self.config.timeout_ms),
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.config.api_key.as_str())
            .timeout(timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(normalize_error_response(status, response).await);
        }

        let data: Value = response.json().await?;
        if !(data.is_object() || data.is_array()) {
            return Err(Error::Response(
                "server returned a non-structured payload".to_string(),
            ));
        }

        info!(%status, url = %body.url, emojis = %emojis, "Reaction sent");
        Ok(data)
    }

    /// Send reactions to multiple channel posts, sequentially.
    ///
    /// Every item is validated up front; a bad item aborts the whole batch
    /// before any request goes out. After that, each item is sent in input
    /// order with a delay in between, and per-item send failures are
    /// recorded as [`BatchResult::Failure`] instead of aborting the rest.
    ///
    /// # Arguments
    ///
    /// * `items` - Ordered reaction targets
    /// * `options` - Optional delay and per-request timeout overrides
    ///
    /// # Returns
    ///
    /// One [`BatchResult`] per item, in input order.
    pub async fn send_batch_reactions(
        &self,
        items: &[BatchItem],
        options: BatchOptions,
    ) -> Result<Vec<BatchResult>> {
        if items.is_empty() {
            return Err(Error::Validation(
                "batch must contain at least one reaction".to_string(),
            ));
        }

        // Eager pre-validation: no request goes out if any item is bad.
        for (index, item) in items.iter().enumerate() {
            if item.url.is_empty() {
                return Err(Error::Validation(format!(
                    "reaction at index {index} has no URL"
                )));
            }
            if item.emojis.is_unset() {
                return Err(Error::Validation(format!(
                    "reaction at index {index} has no emoji"
                )));
            }
            if !validate_url(&item.url) {
                return Err(Error::Validation(format!(
                    "invalid URL at index {index}: {}",
                    item.url
                )));
            }
        }

        let delay_ms = options
            .delay_ms
            .or(self.config.delay_ms)
            .unwrap_or(DEFAULT_BATCH_DELAY_MS);
        let send_options = SendOptions {
            timeout_ms: options.timeout_ms,
        };

        info!(items = items.len(), delay_ms, "Starting batch send");

        let mut results = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self
                .send_reaction(&item.url, item.emojis.clone(), send_options)
                .await
            {
                Ok(data) => {
                    debug!(index, url = %item.url, "Batch item succeeded");
                    results.push(BatchResult::Success {
                        index,
                        url: item.url.clone(),
                        data,
                    });
                }
                Err(err) => {
                    warn!(index, url = %item.url, error = %err, "Batch item failed");
                    let (error, status, response) = match err {
                        Error::Api {
                            message,
                            status,
                            response,
                        } => (message, Some(status), response),
                        other => (other.to_string(), None, None),
                    };
                    results.push(BatchResult::Failure {
                        index,
                        url: item.url.clone(),
                        error,
                        status,
                        response,
                    });
                }
            }

            // Delay between requests, skipped after the last one
            if index < items.len() - 1 && delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }

        Ok(results)
    }
}

/// Translate an error-status response into [`Error::Api`], preferring the
/// server's own `message` field over the generic status line.
async fn normalize_error_response(status: StatusCode, response: reqwest::Response) -> Error {
    let body: Option<Value> = response.json().await.ok();

    let message = body
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

    warn!(%status, "Server rejected reaction request");

    Error::Api {
        message,
        status: status.as_u16(),
        response: body,
    }
}
