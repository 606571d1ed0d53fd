//! Error types for the Path of Exile API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Path of Exile API.
#[derive(Debug, Error)]
pub enum PoeError {
    /// The host or base URL could not be parsed. Only raised at construction.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP transport error (DNS, connection refused, timeout, TLS failure),
    /// or the transport itself could not be built.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// A 200 body that should be returned as text is not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Failed to decode the profile JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Classified non-200 HTTP status.
///
/// | Status | Variant                   |
/// |--------|---------------------------|
/// | 401    | `SessionExpired`          |
/// | 403    | `ProfileHiddenOrMissing`  |
/// | 429    | `RateLimited`             |
/// | other  | `UnknownService`          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// `POESESSID` is no longer valid; a new session cookie is required.
    #[error("POESESSID has expired, please update it")]
    SessionExpired,

    /// The requested account or character does not exist or is private.
    #[error("account or character does not exist or is hidden")]
    ProfileHiddenOrMissing,

    /// Requests are being sent too fast.
    #[error("too many requests, please try again later")]
    RateLimited,

    /// Any other status, including 3xx responses (redirects are not followed).
    #[error("unexpected response status {status}")]
    UnknownService {
        /// HTTP status code returned by the server.
        status: u16,
    },
}

impl StatusError {
    /// HTTP status code this error was classified from.
    pub fn status(self) -> u16 {
        match self {
            Self::SessionExpired => 401,
            Self::ProfileHiddenOrMissing => 403,
            Self::RateLimited => 429,
            Self::UnknownService { status } => status,
        }
    }

    /// Whether the same request may succeed later without changing anything.
    ///
    /// Informational only: the client never retries on its own.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

/// Translate an HTTP status code. 200 is the only success.
pub fn classify(status: u16) -> std::result::Result<(), StatusError> {
    match status {
        200 => Ok(()),
        401 => Err(StatusError::SessionExpired),
        403 => Err(StatusError::ProfileHiddenOrMissing),
        429 => Err(StatusError::RateLimited),
        status => Err(StatusError::UnknownService { status }),
    }
}

/// Convenience alias for `Result<T, PoeError>`.
pub type Result<T> = std::result::Result<T, PoeError>;
