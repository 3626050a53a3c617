//! Error types for the snoo crate.
//!
//! Every operation returns [`Result`], and every error is terminal for the
//! call that produced it. Nothing is retried.
//!
//! # Error Handling
//!
//! Errors fall into three groups:
//!
//! - Preconditions checked before any request is sent:
//!   [`Error::InvalidArgument`]
//! - Request construction failures, also before any request is sent:
//!   [`Error::Encode`] and [`Error::Config`]
//! - Failures of the HTTP exchange or of decoding its response:
//!   [`Error::Http`], [`Error::Api`], [`Error::Json`], [`Error::Reddit`]
//!   and [`Error::EmptyResponse`]
//!
//! # Example
//!
//! ```no_run
//! use snoo::{Error, RedditClient};
//!
//! # async fn example() -> snoo::Result<()> {
//! let client = RedditClient::builder().access_token("token").build()?;
//!
//! match client.posts().hide(&["t3_abc123"]).await {
//!     Ok(()) => println!("hidden"),
//!     Err(Error::Api { status: 401, .. }) => eprintln!("token expired"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use thiserror::Error;

/// The error type for Reddit API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed a precondition, e.g. an empty id list.
    ///
    /// No request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Form parameters could not be encoded.
    ///
    /// No request was made.
    #[error("Could not encode form parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Invalid client configuration, such as an unparsable base URL.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Reddit answered with a non-success status code.
    ///
    /// `message` holds the response body as text.
    #[error("Reddit returned HTTP {status}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The response body.
        message: String,
    },

    /// JSON deserialization error.
    ///
    /// Occurs when a response, or a single thing inside a listing, does not
    /// have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reddit accepted the request but reported errors in the response body.
    #[error("Reddit reported errors: {}", format_api_errors(.0))]
    Reddit(Vec<ApiError>),

    /// The response envelope did not contain the expected data.
    #[error("Reddit returned an empty response")]
    EmptyResponse,
}

/// A single error reported by Reddit inside a `json.errors` array.
///
/// Reddit encodes these as `[code, message, field]` triples, e.g.
/// `["SUBREDDIT_NOEXIST", "that subreddit doesn't exist", "sr"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Machine readable error code.
    pub code: String,
    /// Human readable explanation.
    pub message: String,
    /// The form field the error refers to, if any.
    pub field: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {} ({})", self.code, self.message, field),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

fn format_api_errors(errors: &[ApiError]) -> String {
    errors
        .iter()
        .map(ApiError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A specialized Result type for Reddit API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reddit_errors_are_joined() {
        let err = Error::Reddit(vec![
            ApiError {
                code: "BAD_SR_NAME".into(),
                message: "that name isn't going to work".into(),
                field: Some("sr".into()),
            },
            ApiError {
                code: "RATELIMIT".into(),
                message: "take a break".into(),
                field: None,
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Reddit reported errors: BAD_SR_NAME: that name isn't going to work (sr); \
             RATELIMIT: take a break"
        );
    }
}
