//! Accessors for the custom property values of a repository.
//!
//! See: https://docs.github.com/en/rest/repos/custom-properties

use async_trait::async_trait;
use http::Method;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    CustomPropertiesPayload, CustomPropertyNonNullValue, CustomPropertyNullValue,
    CustomPropertyValue, Error, GitHubClient, RequestContext, Response,
};

#[cfg(test)]
#[path = "repository_properties_tests.rs"]
mod tests;

/// Trait for reading and writing the custom property values of a repository.
///
/// Each operation is a single request/response round trip governed by the
/// given [`RequestContext`]. Nothing is retried or cached.
#[async_trait]
pub trait RepositoryPropertiesClient: Send + Sync {
    /// Gets all custom property values that are set for a repository.
    ///
    /// Properties without a value on the repository are absent from the list.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Cancellation and deadline for the call.
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidRequest` if `owner` or `repo` is empty or not a valid path segment;
    ///   no request is sent.
    /// - `Error::Cancelled` / `Error::DeadlineExceeded` if the context aborts the call.
    /// - `Error::NotFound`, `Error::RateLimitExceeded`, `Error::ApiError` or
    ///   `Error::Deserialization` with the response attached.
    async fn get_all_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
    ) -> Result<(Vec<CustomPropertyValue>, Response), Error>;

    /// Creates new or updates existing custom property values for a repository.
    ///
    /// Each named property is created if absent or overwritten if present.
    /// Properties not mentioned in `values` are left untouched. An empty slice is
    /// sent as `{"properties": []}`.
    ///
    /// # Errors
    ///
    /// Same as [`RepositoryPropertiesClient::get_all_custom_property_values`].
    async fn create_or_update_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        values: &[CustomPropertyNonNullValue],
    ) -> Result<Response, Error>;

    /// Removes the values of the named custom properties from a repository.
    ///
    /// Sends each property with a `null` value, which GitHub treats as unset.
    ///
    /// # Errors
    ///
    /// Same as [`RepositoryPropertiesClient::get_all_custom_property_values`].
    async fn clear_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        properties: &[CustomPropertyNullValue],
    ) -> Result<Response, Error>;
}

#[async_trait]
impl RepositoryPropertiesClient for GitHubClient {
    #[instrument(skip(self, ctx), fields(owner = %owner, repo = %repo))]
    async fn get_all_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
    ) -> Result<(Vec<CustomPropertyValue>, Response), Error> {
        let path = property_values_path(owner, repo)?;
        let request = self.new_request::<()>(Method::GET, &path, None)?;

        let (values, response) = self
            .execute::<Vec<CustomPropertyValue>>(ctx, request)
            .await?;
        let values = values.unwrap_or_default();

        info!(
            count = values.len(),
            status = response.status(),
            "Retrieved custom property values"
        );

        Ok((values, response))
    }

    #[instrument(skip(self, ctx, values), fields(owner = %owner, repo = %repo, count = values.len()))]
    async fn create_or_update_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        values: &[CustomPropertyNonNullValue],
    ) -> Result<Response, Error> {
        let response = self.patch_property_values(ctx, owner, repo, values).await?;

        info!(
            status = response.status(),
            "Created or updated custom property values"
        );

        Ok(response)
    }

    #[instrument(skip(self, ctx, properties), fields(owner = %owner, repo = %repo, count = properties.len()))]
    async fn clear_custom_property_values(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        properties: &[CustomPropertyNullValue],
    ) -> Result<Response, Error> {
        let response = self
            .patch_property_values(ctx, owner, repo, properties)
            .await?;

        info!(status = response.status(), "Cleared custom property values");

        Ok(response)
    }
}

impl GitHubClient {
    async fn patch_property_values<T>(
        &self,
        ctx: &RequestContext,
        owner: &str,
        repo: &str,
        values: &[T],
    ) -> Result<Response, Error>
    where
        T: Serialize + Sync,
    {
        let path = property_values_path(owner, repo)?;
        let payload = CustomPropertiesPayload::new(values.iter().collect::<Vec<_>>());
        let request = self.new_request(Method::PATCH, &path, Some(&payload))?;

        self.execute_ignoring_body(ctx, request).await
    }
}

fn property_values_path(owner: &str, repo: &str) -> Result<String, Error> {
    validate_path_segment("Repository owner", owner)?;
    validate_path_segment("Repository name", repo)?;

    Ok(format!("repos/{owner}/{repo}/properties/values"))
}

/// Rejects values that would change the request target once put in the path.
fn validate_path_segment(kind: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRequest(format!("{kind} must not be empty")));
    }
    if value == "." || value == ".." {
        return Err(Error::InvalidRequest(format!(
            "{kind} '{value}' is not a valid path segment"
        )));
    }
    let forbidden = |c: &char| {
        matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
    };
    if let Some(c) = value.chars().find(forbidden) {
        return Err(Error::InvalidRequest(format!(
            "{kind} '{value}' contains the character {c:?}, which is not allowed in a path segment"
        )));
    }

    Ok(())
}
