use clap::{Parser, Subcommand};

use github_client::{GitHubClient, RequestContext};
use repo_properties_cli::{
    commands::properties_cmd::{
        build_client, clear_properties, get_properties, set_properties, ClearArgs, GetArgs,
        RepoArgs, SetArgs,
    },
    config::AppConfig,
    errors::Error,
};
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// repo-props CLI: Read and write GitHub repository custom property values
#[derive(Parser, Debug)]
#[command(name = "repo-props")]
#[command(about = "Read and write GitHub repository custom property values", long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./repo-props.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show all custom property values of a repository
    Get(GetArgs),

    /// Create or update custom property values
    Set(SetArgs),

    /// Remove custom property values
    Clear(ClearArgs),

    /// Show the CLI version
    Version,
}

/// Builds the authenticated client and the request context for one command.
async fn connect(
    config_path: Option<&str>,
    target: &RepoArgs,
) -> Result<(GitHubClient, RequestContext), Error> {
    let config = AppConfig::resolve(config_path)?;
    let client = build_client(&config, &target.owner).await?;

    let ctx = RequestContext::new().with_timeout(config.timeout());
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            interrupt.cancel();
        }
    });

    Ok((client, ctx))
}

async fn run(cli: &Cli) -> Result<String, Error> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Get(args) => {
            let (client, ctx) = connect(config_path, &args.target).await?;
            get_properties(&client, &ctx, args).await
        }
        Commands::Set(args) => {
            let (client, ctx) = connect(config_path, &args.target).await?;
            set_properties(&client, &ctx, args).await
        }
        Commands::Clear(args) => {
            let (client, ctx) = connect(config_path, &args.target).await?;
            clear_properties(&client, &ctx, args).await
        }
        Commands::Version => Ok(format!(
            "repo-props version {}",
            option_env!("REPO_PROPS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
        )),
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `get --format json` output stays machine-readable
    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("REPO_PROPS_LOG"))
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            std::process::exit(0);
        }
        Err(e) => {
            error!("Error: {e}");
            let code = match e {
                Error::InvalidArguments(_) | Error::Config(_) => 2,
                _ => 1,
            };
            std::process::exit(code);
        }
    }
}
