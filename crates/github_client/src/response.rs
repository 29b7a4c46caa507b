//! Response metadata returned alongside decoded GitHub API payloads.
//!
//! Every request executed through [`GitHubClient`](crate::GitHubClient) yields a
//! [`Response`], whether it succeeded or not. It keeps the HTTP status and headers
//! and exposes the rate limit and pagination information GitHub encodes in them.

use chrono::{DateTime, Utc};
use http::{HeaderMap, StatusCode};
use url::Url;

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

const HEADER_LINK: &str = "link";
const HEADER_RATE_LIMIT: &str = "x-ratelimit-limit";
const HEADER_RATE_REMAINING: &str = "x-ratelimit-remaining";
const HEADER_RATE_RESET: &str = "x-ratelimit-reset";
const HEADER_RATE_RESOURCE: &str = "x-ratelimit-resource";
const HEADER_RATE_USED: &str = "x-ratelimit-used";
const HEADER_RETRY_AFTER: &str = "retry-after";

/// Rate limit state reported by GitHub in the `x-ratelimit-*` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    /// Maximum number of requests permitted in the current window
    pub limit: u32,
    /// Requests remaining in the current window
    pub remaining: u32,
    /// Requests made in the current window
    pub used: Option<u32>,
    /// When the current window resets
    pub reset: DateTime<Utc>,
    /// The rate limit bucket the request counted against (e.g. `core`)
    pub resource: Option<String>,
}

/// Page numbers parsed from the `Link` header of a paginated response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<u32>,
    pub prev: Option<u32>,
    pub first: Option<u32>,
    pub last: Option<u32>,
}

/// Metadata of a GitHub API response.
///
/// # Examples
///
/// ```rust
/// use github_client::Response;
/// use http::{HeaderMap, HeaderValue, StatusCode};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-ratelimit-limit", HeaderValue::from_static("5000"));
/// headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
/// headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));
///
/// let response = Response::from_parts(StatusCode::OK, headers);
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.rate().map(|r| r.remaining), Some(4999));
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    rate: Option<Rate>,
    pages: PageLinks,
}

impl Response {
    /// Builds the response metadata from a status code and header map.
    ///
    /// Missing or malformed rate limit and link headers are left unset.
    pub fn from_parts(status: StatusCode, headers: HeaderMap) -> Self {
        let rate = parse_rate(&headers);
        let pages = header_str(&headers, HEADER_LINK)
            .map(parse_link_header)
            .unwrap_or_default();

        Self {
            status,
            headers,
            rate,
            pages,
        }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the HTTP status code as a typed [`StatusCode`].
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the raw response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the rate limit state, if GitHub reported one.
    pub fn rate(&self) -> Option<&Rate> {
        self.rate.as_ref()
    }

    /// Returns the pagination links, all empty for unpaginated responses.
    pub fn pages(&self) -> &PageLinks {
        &self.pages
    }

    /// Returns the `retry-after` delay in seconds, sent with secondary rate limits.
    pub fn retry_after_secs(&self) -> Option<u64> {
        header_str(&self.headers, HEADER_RETRY_AFTER).and_then(|v| v.trim().parse().ok())
    }

    /// Whether this response rejects the request because a rate limit was hit.
    ///
    /// GitHub signals primary limits with 403/429 and `x-ratelimit-remaining: 0`,
    /// and secondary limits with 403/429 and a `retry-after` header.
    pub fn is_rate_limited(&self) -> bool {
        if self.status != StatusCode::FORBIDDEN && self.status != StatusCode::TOO_MANY_REQUESTS {
            return false;
        }

        let exhausted = self.rate.as_ref().is_some_and(|r| r.remaining == 0);
        exhausted || self.retry_after_secs().is_some()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    header_str(headers, name).and_then(|v| v.trim().parse().ok())
}

fn parse_rate(headers: &HeaderMap) -> Option<Rate> {
    let limit = header_u32(headers, HEADER_RATE_LIMIT)?;
    let remaining = header_u32(headers, HEADER_RATE_REMAINING)?;
    let reset_epoch: i64 = header_str(headers, HEADER_RATE_RESET)?.trim().parse().ok()?;
    let reset = DateTime::from_timestamp(reset_epoch, 0)?;

    Some(Rate {
        limit,
        remaining,
        used: header_u32(headers, HEADER_RATE_USED),
        reset,
        resource: header_str(headers, HEADER_RATE_RESOURCE).map(str::to_string),
    })
}

/// Parses a `Link` header such as
/// `<https://api.github.com/x?page=2>; rel="next", <https://api.github.com/x?page=5>; rel="last"`.
fn parse_link_header(value: &str) -> PageLinks {
    let mut pages = PageLinks::default();

    for link in value.split(',') {
        let mut segments = link.split(';');
        let Some(target) = segments.next() else {
            continue;
        };
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let Some(page) = page_number(target) else {
            continue;
        };

        for segment in segments {
            let Some(rels) = segment.trim().strip_prefix("rel=") else {
                continue;
            };
            for rel in rels.trim_matches('"').split_whitespace() {
                match rel {
                    "next" => pages.next = Some(page),
                    "prev" => pages.prev = Some(page),
                    "first" => pages.first = Some(page),
                    "last" => pages.last = Some(page),
                    _ => {}
                }
            }
        }
    }

    pages
}

fn page_number(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
