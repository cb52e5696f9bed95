use serde::Serialize;
use serde_json::Value;

use crate::emoji::EmojiInput;

/// One reaction target in a batch: a channel post URL plus emoji input.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub url: String,
    pub emojis: EmojiInput,
}

impl BatchItem {
    pub fn new(url: impl Into<String>, emojis: impl Into<EmojiInput>) -> Self {
        Self {
            url: url.into(),
            emojis: emojis.into(),
        }
    }
}

/// Options for [`crate::ReactionClient::send_batch_reactions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Delay between requests in milliseconds. Falls back to the client's
    /// configured delay, then to 1000 ms.
    pub delay_ms: Option<u64>,
    /// Per-request timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
}

/// Outcome of one batch item.
///
/// A batch of N items always yields exactly N results, in input order,
/// with each result's `index` matching the item's position. A failed item
/// never aborts the rest of the batch.
///
/// Serializes with a `success: bool` discriminant alongside the variant
/// fields, so a JSON consumer sees `{"success": true, "index": 0, ...}`.
#[derive(Debug, Clone)]
pub enum BatchResult {
    Success {
        index: usize,
        url: String,
        /// Raw server response, passed through unchanged.
        data: Value,
    },
    Failure {
        index: usize,
        url: String,
        error: String,
        /// HTTP status, present when the server responded with an error.
        status: Option<u16>,
        /// Raw error response body, when one was received and parseable.
        response: Option<Value>,
    },
}

impl Serialize for BatchResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            BatchResult::Success { index, url, data } => {
                let mut state = serializer.serialize_struct("BatchResult", 4)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("index", index)?;
                state.serialize_field("url", url)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            BatchResult::Failure {
                index,
                url,
                error,
                status,
                response,
            } => {
                let fields =
                    4 + usize::from(status.is_some()) + usize::from(response.is_some());
                let mut state = serializer.serialize_struct("BatchResult", fields)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("index", index)?;
                state.serialize_field("url", url)?;
                state.serialize_field("error", error)?;
                // Side channels are omitted entirely when absent
                match status {
                    Some(status) => state.serialize_field("status", status)?,
                    None => state.skip_field("status")?,
                }
                match response {
                    Some(response) => state.serialize_field("response", response)?,
                    None => state.skip_field("response")?,
                }
                state.end()
            }
        }
    }
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchResult::Success { .. })
    }

    pub fn index(&self) -> usize {
        match self {
            BatchResult::Success { index, .. } | BatchResult::Failure { index, .. } => *index,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            BatchResult::Success { url, .. } | BatchResult::Failure { url, .. } => url,
        }
    }
}
