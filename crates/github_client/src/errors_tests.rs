use super::*;
use http::{HeaderMap, StatusCode};
use std::error::Error as StdError;

fn response(status: StatusCode) -> Box<Response> {
    Box::new(Response::from_parts(status, HeaderMap::new()))
}

#[test]
fn test_api_error() {
    let error = Error::ApiError {
        message: "Validation Failed".to_string(),
        response: response(StatusCode::UNPROCESSABLE_ENTITY),
    };

    assert_eq!(
        error.to_string(),
        "API request failed with status 422: Validation Failed"
    );
    assert!(error.source().is_none());
    assert_eq!(error.status(), Some(422));
}

#[test]
fn test_auth_error() {
    let error = Error::AuthError("Invalid credentials".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: Invalid credentials"
    );
    assert!(error.source().is_none());
    assert!(error.response().is_none());
}

#[test]
fn test_cancelled_error_has_no_response() {
    let error = Error::Cancelled;

    assert_eq!(error.to_string(), "Request was cancelled");
    assert!(error.response().is_none());
}

#[test]
fn test_invalid_request_error() {
    let error = Error::InvalidRequest("owner must not be empty".to_string());

    assert_eq!(error.to_string(), "Invalid request: owner must not be empty");
    assert!(error.response().is_none());
}

#[test]
fn test_deserialization_error_keeps_source_and_response() {
    let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let error = Error::Deserialization {
        source,
        response: response(StatusCode::OK),
    };

    assert!(error.source().is_some());
    assert_eq!(error.status(), Some(200));
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound {
        response: response(StatusCode::NOT_FOUND),
    };

    assert_eq!(error.to_string(), "Resource not found");
    assert_eq!(error.status(), Some(404));
}

#[test]
fn test_rate_limit_exceeded_error() {
    let error = Error::RateLimitExceeded {
        response: response(StatusCode::FORBIDDEN),
    };

    assert_eq!(error.to_string(), "Rate limit exceeded");
    assert!(error.source().is_none());
    assert_eq!(error.status(), Some(403));
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
