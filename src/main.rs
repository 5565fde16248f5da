//! RepoLens - GitHub repository/branch aggregation service
//!
//! Main entry point for the RepoLens server.

use clap::Parser;
use repolens::aggregator::RepositoryAggregator;
use repolens::config::AppConfig;
use repolens::github::GitHubClient;
use repolens::server::ApiServer;
use std::process;
use std::sync::Arc;

/// RepoLens - serve a GitHub user's repositories with their branches
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to config file (YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to listen on (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Upstream API base URL (overrides config)
    #[arg(long)]
    github_url: Option<String>,

    /// Bearer token for the upstream API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> repolens::Result<()> {
    repolens::logging::init()?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => {
            let mut config = AppConfig::default();
            config.apply_env();
            config
        }
    };

    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(url) = cli.github_url {
        config.github.base_url = url;
    }
    if cli.token.is_some() {
        config.github.token = cli.token;
    }

    let client = GitHubClient::new(&config.github)?;
    let aggregator = RepositoryAggregator::new(Arc::new(client));

    ApiServer::new(aggregator).run(&config.server.bind_addr).await
}
