mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use t411_core::{load_config, validate_config, SanitizedConfig, T411Client};

use cli::{start_of_day, Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr, command output to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,t411_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    validate_config(&config).context("Configuration validation failed")?;

    let sanitized = SanitizedConfig::from(&config);
    info!(
        username = %sanitized.username,
        base_url = %sanitized.client.base_url,
        resume = sanitized.session_token_configured,
        "Configuration loaded"
    );

    let client = T411Client::from_config(&config)
        .await
        .context("Failed to open a t411 session")?;

    match cli.command {
        Command::Token => {
            println!("{}", client.token().await?);
        }
        Command::Categories => {
            print_json(&client.categories_tree().await?)?;
        }
        Command::Terms { category } => {
            let tree = client.terms_tree().await?;
            match category {
                Some(id) => {
                    let terms = tree
                        .terms_for(&id)
                        .with_context(|| format!("No terms for category {}", id))?;
                    print_json(terms)?;
                }
                None => print_json(&tree)?,
            }
        }
        Command::Search { terms, all } => {
            let request = terms.to_request();
            let result = if all {
                client.search_all_torrents_by_terms(&request).await?
            } else {
                client.search_torrents_by_terms(&request).await?
            };
            print_json(&result)?;
        }
        Command::Details { id } => {
            print_json(&client.torrents_details(&id).await?)?;
        }
        Command::Download { id, prefix } => {
            let path = match prefix {
                Some(prefix) => client.download_torrent_with_prefix(&id, &prefix).await?,
                None => client.download_torrent_by_id(&id).await?,
            };
            println!("{}", path.display());
        }
        Command::Fetch { terms, aired } => {
            let mut request = terms.to_request();
            if let Some(date) = aired {
                request = request.aired(start_of_day(date));
            }
            let path = client.download_torrent_by_terms(&request).await?;
            println!("{}", path.display());
        }
        Command::Profile { uid } => {
            let profile = match uid {
                Some(uid) => client.users_profile(&uid).await?,
                None => client.own_profile().await?,
            };
            print_json(&profile)?;
        }
        Command::Ratio { incoming } => {
            println!("{:.3}", client.own_ratio(incoming).await?);
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
