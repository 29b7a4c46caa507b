use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the repo-props CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication with GitHub could not be set up.
    ///
    /// Returned when no token is available, the GitHub App credentials are
    /// incomplete or the app is not installed for the repository owner.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error occurred while loading or parsing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A GitHub API call failed.
    #[error("GitHub request failed: {0}")]
    GitHub(#[from] github_client::Error),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(String),
}
