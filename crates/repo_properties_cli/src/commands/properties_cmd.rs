//! Custom property commands for the repo-props CLI.
//!
//! # Examples
//!
//! ```bash
//! # Show the values set on a repository
//! repo-props get --owner myorg --repo service-a
//!
//! # Set or overwrite values
//! repo-props set --owner myorg --repo service-a --property env=prod --property team=platform
//!
//! # Remove values
//! repo-props clear --owner myorg --repo service-a --name team
//! ```

use std::fs;

use clap::{Args, ValueEnum};
use github_client::{
    create_app_client, create_token_client, CustomPropertyNonNullValue, CustomPropertyNullValue,
    CustomPropertyValue, GitHubClient, RepositoryPropertiesClient, RequestContext,
};
use tracing::{debug, info, instrument};

use crate::{
    config::{resolve_token, AppConfig, AuthMethod},
    errors::Error,
};

#[cfg(test)]
#[path = "properties_cmd_tests.rs"]
mod tests;

/// The repository a command operates on.
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Organization or user owning the repository
    #[arg(long)]
    pub owner: String,

    /// Repository name
    #[arg(long)]
    pub repo: String,
}

/// Output format for `get`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON output
    Json,
    /// Human-readable `name = value` lines
    Pretty,
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: RepoArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: RepoArgs,

    /// Property to set, as NAME=VALUE. Repeat for several properties.
    #[arg(long = "property", value_parser = parse_key_val, required = true)]
    pub properties: Vec<(String, String)>,
}

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    #[command(flatten)]
    pub target: RepoArgs,

    /// Name of a property to clear. Repeat for several properties.
    #[arg(long = "name", required = true)]
    pub names: Vec<String>,
}

/// Parses a `NAME=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid NAME=VALUE: no `=` found in `{}`", s))?;
    let name = s[..pos].trim();
    if name.is_empty() {
        return Err(format!("invalid NAME=VALUE: empty name in `{}`", s));
    }
    Ok((name.to_string(), s[pos + 1..].to_string()))
}

/// Builds the GitHub client described by the configuration.
///
/// Token authentication reads `GITHUB_TOKEN`. App authentication loads the
/// private key and switches to the installation for `owner`.
///
/// # Errors
///
/// Returns `Error::Config` for incomplete app settings or an unreadable key file,
/// and `Error::Auth` when the client cannot be authenticated.
#[instrument(skip(config), fields(auth_method = ?config.authentication.auth_method))]
pub async fn build_client(config: &AppConfig, owner: &str) -> Result<GitHubClient, Error> {
    let api_url = config.api_url.as_deref();

    match config.authentication.auth_method {
        AuthMethod::Token => {
            let token = resolve_token(|name| std::env::var(name).ok())?;
            let octocrab =
                create_token_client(&token, api_url).map_err(|e| Error::Auth(e.to_string()))?;
            Ok(GitHubClient::new(octocrab))
        }
        AuthMethod::App => {
            let app_id = config.authentication.app_id.ok_or_else(|| {
                Error::Config("authentication.app_id is required for app authentication".to_string())
            })?;
            let key_path = config
                .authentication
                .private_key_path
                .as_ref()
                .ok_or_else(|| {
                    Error::Config(
                        "authentication.private_key_path is required for app authentication"
                            .to_string(),
                    )
                })?;

            debug!(path = ?key_path, "Reading GitHub App private key");
            let private_key = fs::read_to_string(key_path).map_err(|e| {
                Error::Config(format!("Failed to read private key {:?}: {}", key_path, e))
            })?;

            let octocrab = create_app_client(app_id, &private_key, api_url)
                .await
                .map_err(|e| Error::Auth(e.to_string()))?;

            GitHubClient::new(octocrab)
                .installation_client_for_org(owner)
                .await
                .map_err(|e| {
                    Error::Auth(format!(
                        "No usable GitHub App installation for '{}': {}",
                        owner, e
                    ))
                })
        }
    }
}

/// Fetches and renders the property values of a repository.
#[instrument(skip(client, ctx), fields(owner = %args.target.owner, repo = %args.target.repo))]
pub async fn get_properties(
    client: &dyn RepositoryPropertiesClient,
    ctx: &RequestContext,
    args: &GetArgs,
) -> Result<String, Error> {
    let (values, _) = client
        .get_all_custom_property_values(ctx, &args.target.owner, &args.target.repo)
        .await?;

    render_values(&values, args.format)
}

/// Creates or updates property values.
#[instrument(skip(client, ctx), fields(owner = %args.target.owner, repo = %args.target.repo))]
pub async fn set_properties(
    client: &dyn RepositoryPropertiesClient,
    ctx: &RequestContext,
    args: &SetArgs,
) -> Result<String, Error> {
    let values: Vec<CustomPropertyNonNullValue> = args
        .properties
        .iter()
        .map(|(name, value)| CustomPropertyNonNullValue::new(name, value))
        .collect();

    client
        .create_or_update_custom_property_values(
            ctx,
            &args.target.owner,
            &args.target.repo,
            &values,
        )
        .await?;

    info!(count = values.len(), "Custom properties updated");
    Ok(format!(
        "Updated {} custom propert{} on {}/{}",
        values.len(),
        if values.len() == 1 { "y" } else { "ies" },
        args.target.owner,
        args.target.repo
    ))
}

/// Removes property values.
#[instrument(skip(client, ctx), fields(owner = %args.target.owner, repo = %args.target.repo))]
pub async fn clear_properties(
    client: &dyn RepositoryPropertiesClient,
    ctx: &RequestContext,
    args: &ClearArgs,
) -> Result<String, Error> {
    let properties: Vec<CustomPropertyNullValue> = args
        .names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(CustomPropertyNullValue::new)
        .collect();
    if properties.is_empty() {
        return Err(Error::InvalidArguments(
            "at least one non-empty --name is required".to_string(),
        ));
    }

    client
        .clear_custom_property_values(ctx, &args.target.owner, &args.target.repo, &properties)
        .await?;

    info!(count = properties.len(), "Custom properties cleared");
    Ok(format!(
        "Cleared {} custom propert{} on {}/{}",
        properties.len(),
        if properties.len() == 1 { "y" } else { "ies" },
        args.target.owner,
        args.target.repo
    ))
}

/// Renders property values in the requested format.
pub fn render_values(values: &[CustomPropertyValue], format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(values).map_err(|e| Error::Output(e.to_string()))
        }
        OutputFormat::Pretty => {
            if values.is_empty() {
                return Ok("No custom properties set".to_string());
            }

            let width = values
                .iter()
                .map(|v| v.property_name.len())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = values
                .iter()
                .map(|v| {
                    let value = v
                        .value
                        .as_ref()
                        .map(|value| value.to_string())
                        .unwrap_or_else(|| "(unset)".to_string());
                    format!("{:width$} = {}", v.property_name, value, width = width)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
