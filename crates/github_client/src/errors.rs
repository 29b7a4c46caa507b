//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Errors fall into three groups:
//!
//! - construction errors, raised before any network I/O takes place,
//! - cancellation errors, raised when the [`RequestContext`](crate::RequestContext)
//!   aborts a call,
//! - execution errors, raised after a request was sent. These carry the
//!   [`Response`] metadata whenever GitHub answered, so callers can inspect the
//!   status code and rate limit headers.

use crate::response::Response;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, RepositoryPropertiesClient, RequestContext};
///
/// match client
///     .get_all_custom_property_values(&RequestContext::new(), "my-org", "my-repo")
///     .await
/// {
///     Ok((values, _)) => println!("{} properties set", values.len()),
///     Err(Error::NotFound { .. }) => eprintln!("Repository not found"),
///     Err(Error::RateLimitExceeded { response }) => {
///         eprintln!("Rate limit exceeded, resets at {:?}", response.rate().map(|r| r.reset))
///     }
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered with a non-success status that has no more specific variant.
    ///
    /// The message is taken from the `message` field of GitHub's error body when
    /// one is present.
    #[error("API request failed with status {}: {message}", response.status())]
    ApiError {
        message: String,
        response: Box<Response>,
    },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - GitHub App credentials are invalid or expired
    /// - Network connectivity issues prevent authentication
    /// - The GitHub App lacks necessary permissions
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The request context was cancelled before or during the call.
    #[error("Request was cancelled")]
    Cancelled,

    /// The deadline of the request context passed before GitHub answered.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The response body could not be decoded into the expected type.
    ///
    /// This may indicate API version changes or an unexpected response format.
    #[error("Failed to deserialize GitHub response: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        response: Box<Response>,
    },

    /// The request could not be built: bad path, unsupported method or a body
    /// that does not serialize. Nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// Used when looking up app installations yields nothing usable.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found (HTTP 404).
    ///
    /// GitHub also answers 404 when the resource exists but is not visible with
    /// the current credentials.
    #[error("Resource not found")]
    NotFound { response: Box<Response> },

    /// GitHub API rate limit has been exceeded.
    ///
    /// The attached response carries the rate limit headers; the reset time
    /// tells the caller when to retry.
    #[error("Rate limit exceeded")]
    RateLimitExceeded { response: Box<Response> },

    /// The request failed in the transport layer before a response was received.
    #[error("Failed to send request to GitHub: {source}")]
    Transport {
        #[source]
        source: octocrab::Error,
    },
}

impl Error {
    /// Returns the response metadata attached to an execution error.
    ///
    /// Construction, cancellation and transport errors have no response.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::ApiError { response, .. }
            | Error::Deserialization { response, .. }
            | Error::NotFound { response }
            | Error::RateLimitExceeded { response } => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status of the response attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(Response::status)
    }
}
