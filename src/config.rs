use serde::Serialize;

use crate::error::{Error, Result};

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default delay between batch requests in milliseconds
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1_000;

/// Client configuration: API key plus timing knobs.
///
/// Construct with [`ClientConfig::new`] and the builder-style setters, then
/// pass it to [`crate::ReactionClient::new`].
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Request timeout in milliseconds. A value of 0 counts as unspecified
    /// and falls back to [`DEFAULT_TIMEOUT_MS`].
    pub timeout_ms: u64,
    /// Delay between batch requests in milliseconds. Only used by
    /// [`crate::ReactionClient::send_batch_reactions`].
    pub delay_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration with the given API key and default timing.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            delay_ms: None,
        }
    }

    /// Set the request timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the delay between batch requests in milliseconds.
    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Trim the key, reject empty keys, and fill in the default timeout.
    pub(crate) fn resolve(mut self) -> Result<Self> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(Error::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        self.api_key = key.to_string();
        if self.timeout_ms == 0 {
            self.timeout_ms = DEFAULT_TIMEOUT_MS;
        }
        Ok(self)
    }
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_key(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    if s.len() <= VISIBLE_CHARS * 2 {
        // If string is too short, mask everything except first char
        if s.is_empty() {
            return "<empty>".to_string();
        }
        return format!("{}***", &s[..1]);
    }

    format!(
        "{}***{}",
        &s[..VISIBLE_CHARS],
        &s[s.len() - VISIBLE_CHARS..]
    )
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &mask_key(&self.api_key))
            .field("timeout_ms", &self.timeout_ms)
            .field("delay_ms", &self.delay_ms)
            .finish()
    }
}

/// Constructor argument: either a bare API key or a full configuration.
///
/// Mirrors the two accepted construction shapes with a tagged union instead
/// of runtime type inspection; `From` impls let callers pass a `&str`,
/// `String`, or [`ClientConfig`] directly.
#[derive(Debug, Clone)]
pub enum ClientAuth {
    Key(String),
    Config(ClientConfig),
}

impl ClientAuth {
    pub(crate) fn into_config(self) -> Result<ClientConfig> {
        match self {
            ClientAuth::Key(key) => ClientConfig::new(key).resolve(),
            ClientAuth::Config(config) => config.resolve(),
        }
    }
}

impl From<&str> for ClientAuth {
    fn from(key: &str) -> Self {
        ClientAuth::Key(key.to_string())
    }
}

impl From<String> for ClientAuth {
    fn from(key: String) -> Self {
        ClientAuth::Key(key)
    }
}

impl From<ClientConfig> for ClientAuth {
    fn from(config: ClientConfig) -> Self {
        ClientAuth::Config(config)
    }
}

/// Snapshot of the current configuration with the API key masked.
///
/// Returned by [`crate::ReactionClient::get_config`]; the raw key is never
/// exposed through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskedConfig {
    pub api_key: String,
    pub timeout_ms: u64,
    pub delay_ms: Option<u64>,
}

/// Partial configuration update for [`crate::ReactionClient::set_config`].
///
/// Absent fields are left untouched. Zero timeouts/delays and empty keys
/// are ignored silently rather than rejected; this is documented behavior,
/// not an oversight.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub timeout_ms: Option<u64>,
    pub delay_ms: Option<u64>,
    pub api_key: Option<String>,
}
