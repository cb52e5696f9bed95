use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the reaction client.
///
/// Transport failures are normalized into three shapes so callers can
/// distinguish them: [`Error::Api`] (the server answered with an error
/// status, and carries that status plus the raw body), [`Error::NoResponse`]
/// (the request went out but nothing came back), and [`Error::Request`]
/// (the request could not even be constructed or sent).
#[derive(Debug, Error)]
pub enum Error {
    /// API key missing/empty, or the HTTP client could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// Server answered with a success status but the body was missing or
    /// not structured JSON.
    #[error("invalid response from server: {0}")]
    Response(String),

    /// Server responded with an error status.
    #[error("{message}")]
    Api {
        /// Server-supplied `message` field when present, otherwise
        /// `"Server error: {status}"`.
        message: String,
        status: u16,
        /// Raw response body, when it was parseable JSON.
        response: Option<Value>,
    },

    /// Request was sent but no response arrived (timeout or connection
    /// failure).
    #[error("no response from server; check connectivity or whether the server is down")]
    NoResponse,

    /// Request could not be constructed or sent.
    #[error("request setup error: {0}")]
    Request(String),
}

impl Error {
    /// HTTP status code, present only when the server responded with an
    /// error status. Callers branch on this to tell "server rejected the
    /// request" apart from "no response at all".
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body attached to a server error, if any.
    pub fn response(&self) -> Option<&Value> {
        match self {
            Error::Api { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Error::NoResponse
        } else if err.is_decode() {
            Error::Response(err.to_string())
        } else {
            Error::Request(err.to_string())
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_present_only_for_api_errors() {
        let api = Error::Api {
            message: "nope".to_string(),
            status: 403,
            response: Some(json!({"message": "nope"})),
        };
        assert_eq!(api.status(), Some(403));
        assert!(api.response().is_some());

        assert_eq!(Error::NoResponse.status(), None);
        assert_eq!(Error::Validation("bad".to_string()).status(), None);
        assert!(Error::NoResponse.response().is_none());
    }

    #[test]
    fn test_api_error_displays_message() {
        let api = Error::Api {
            message: "Server error: 500".to_string(),
            status: 500,
            response: None,
        };
        assert_eq!(api.to_string(), "Server error: 500");
    }
}
