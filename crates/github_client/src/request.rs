//! Request construction and execution against the GitHub REST API.
//!
//! Every API accessor in this crate is written as the same two fallible steps:
//! build the request with [`GitHubClient::new_request`], then send it with
//! [`GitHubClient::execute`] (or [`GitHubClient::execute_ignoring_body`] when no
//! response body is expected). Building never touches the network; executing
//! always yields the [`Response`] metadata, either alongside the decoded body
//! or inside the error.

use http::{Method, Uri};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{log_octocrab_error, Error, GitHubClient, RequestContext, Response};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// A request that passed local validation and is ready to be sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    uri: Uri,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The serialized JSON body, if the request has one.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// The error body GitHub sends with non-success responses.
#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: Option<String>,
}

impl GitHubClient {
    /// Builds a request for `path`, relative to the client's base URI.
    ///
    /// A leading `/` is added when missing. The body, when given, is serialized
    /// to JSON here so that unserializable bodies fail before any I/O.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRequest` if the method is not supported, the path is
    /// empty or not a valid URI path, or the body cannot be serialized.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        if !is_supported_method(&method) {
            return Err(Error::InvalidRequest(format!(
                "Unsupported HTTP method: {method}"
            )));
        }

        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Err(Error::InvalidRequest(
                "Request path must not be empty".to_string(),
            ));
        }

        let absolute = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let uri = Uri::try_from(absolute.as_str()).map_err(|e| {
            Error::InvalidRequest(format!("Invalid request path '{absolute}': {e}"))
        })?;

        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| Error::InvalidRequest(format!("Failed to serialize request body: {e}")))?;

        Ok(ApiRequest { method, uri, body })
    }

    /// Sends `request` and decodes the response body into `T`.
    ///
    /// An empty success body decodes to `None`.
    ///
    /// # Errors
    ///
    /// - `Error::Cancelled` / `Error::DeadlineExceeded` when the context aborts the call
    /// - `Error::Transport` when no response was received
    /// - `Error::NotFound`, `Error::RateLimitExceeded` or `Error::ApiError` for
    ///   non-success statuses
    /// - `Error::Deserialization` when the body does not decode into `T`
    #[instrument(skip(self, ctx, request), fields(method = %request.method, path = %request.uri.path()))]
    pub async fn execute<T>(
        &self,
        ctx: &RequestContext,
        request: ApiRequest,
    ) -> Result<(Option<T>, Response), Error>
    where
        T: DeserializeOwned,
    {
        let (response, body) = ctx.run(self.send(request)).await?;
        if body.trim().is_empty() {
            return Ok((None, response));
        }

        match serde_json::from_str::<T>(&body) {
            Ok(value) => Ok((Some(value), response)),
            Err(source) => {
                warn!(
                    status = response.status(),
                    error = %source,
                    "Failed to decode GitHub response body"
                );
                Err(Error::Deserialization {
                    source,
                    response: Box::new(response),
                })
            }
        }
    }

    /// Sends `request` and discards the response body.
    ///
    /// # Errors
    ///
    /// Same as [`GitHubClient::execute`], minus `Error::Deserialization`.
    #[instrument(skip(self, ctx, request), fields(method = %request.method, path = %request.uri.path()))]
    pub async fn execute_ignoring_body(
        &self,
        ctx: &RequestContext,
        request: ApiRequest,
    ) -> Result<Response, Error> {
        let (response, _) = ctx.run(self.send(request)).await?;
        Ok(response)
    }

    async fn send(&self, request: ApiRequest) -> Result<(Response, String), Error> {
        let ApiRequest { method, uri, body } = request;

        let result = match method {
            Method::GET => self.client._get(uri).await,
            Method::POST => self.client._post(uri, body.as_ref()).await,
            Method::PUT => self.client._put(uri, body.as_ref()).await,
            Method::PATCH => self.client._patch(uri, body.as_ref()).await,
            Method::DELETE => self.client._delete(uri, body.as_ref()).await,
            other => {
                return Err(Error::InvalidRequest(format!(
                    "Unsupported HTTP method: {other}"
                )))
            }
        };

        let http_response = result.map_err(|e| {
            log_octocrab_error("Failed to send request to GitHub", &e);
            Error::Transport { source: e }
        })?;

        let status = http_response.status();
        let headers = http_response.headers().clone();
        let body = self
            .client
            .body_to_string(http_response)
            .await
            .map_err(|e| {
                log_octocrab_error("Failed to read GitHub response body", &e);
                Error::Transport { source: e }
            })?;

        let response = Response::from_parts(status, headers);
        debug!(
            status = response.status(),
            body_length = body.len(),
            "Received response from GitHub"
        );

        if !response.is_success() {
            return Err(error_for_status(response, &body));
        }

        Ok((response, body))
    }
}

fn is_supported_method(method: &Method) -> bool {
    [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ]
    .contains(method)
}

/// Maps a non-success response to the matching error variant.
fn error_for_status(response: Response, body: &str) -> Error {
    let message = serde_json::from_str::<GitHubErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            response
                .status_code()
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    warn!(
        status = response.status(),
        error_message = %message,
        "GitHub returned an error response"
    );

    if response.status_code() == http::StatusCode::NOT_FOUND {
        return Error::NotFound {
            response: Box::new(response),
        };
    }

    if response.is_rate_limited() {
        return Error::RateLimitExceeded {
            response: Box::new(response),
        };
    }

    Error::ApiError {
        message,
        response: Box::new(response),
    }
}
