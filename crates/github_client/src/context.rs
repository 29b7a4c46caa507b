//! Cancellation and deadline carrier for outbound GitHub API calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::Error;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Governs a single outbound request: the caller can cancel it through the
/// token or bound it with a deadline.
///
/// Clones share the same cancellation token, so cancelling one clone cancels
/// every call made with any of them.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use github_client::RequestContext;
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(10));
/// assert!(ctx.deadline().is_some());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context driven by an existing cancellation token.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: token,
            deadline: None,
        }
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels every call governed by this context or its clones.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Fails if the context is already cancelled or past its deadline.
    pub fn check(&self) -> Result<(), Error> {
        if self.cancellation.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(Error::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drives `future` to completion unless the context is cancelled or its
    /// deadline passes first, in which case the future is dropped.
    pub async fn run<F, T>(&self, future: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        self.check()?;

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, future)
                    .await
                    .map_err(|_| {
                        debug!("Request deadline exceeded");
                        Error::DeadlineExceeded
                    })?,
                None => future.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => {
                debug!("Request cancelled by caller");
                Err(Error::Cancelled)
            }
            result = bounded => result,
        }
    }
}
