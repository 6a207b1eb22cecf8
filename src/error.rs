//! Client error taxonomy and user-facing message resolution.
//!
//! Every flow catches its own failures and renders them in place. The variants
//! below separate where a failure came from; [`ClientError::user_message`] decides
//! what the user actually sees.

use thiserror::Error;

/// Shown when a URL fails validation after normalization.
pub const INVALID_URL: &str = "Please enter a valid URL";

/// Shown when the expiration input is not strictly in the future.
pub const EXPIRATION_NOT_IN_FUTURE: &str = "Expiration date must be in the future.";

/// Shown when the lookup form is submitted without a slug.
pub const EMPTY_SLUG: &str = "Please enter a slug.";

/// Fallback for creation, statistics and deletion failures without a server message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Fallback for lookup failures without a server message.
pub const LINK_NOT_FOUND: &str = "Link not found.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// Backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        /// The `error` field of the response body, when one was present.
        message: Option<String>,
    },

    /// Network failure or a body that could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The flow already has a request in flight.
    #[error("a request is already in progress")]
    Pending,

    /// The response arrived after the flow moved on; it was discarded.
    #[error("response superseded by a newer request")]
    Superseded,
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Resolves the text displayed to the user.
    ///
    /// Validation messages and server-provided `error` texts are shown verbatim.
    /// Everything else collapses into the flow-specific `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
