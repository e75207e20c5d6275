//! Drumline CLI - Command-line interface for the pattern queue service

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use colored::Colorize;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "drumline")]
#[command(about = "Drumline pattern queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Service base URL (include the API prefix if the server mounts one)
    #[arg(long, env = "DRUMLINE_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Health,

    /// Submit a pattern to the queue
    Submit {
        /// Pattern name
        #[arg(short, long)]
        name: String,

        /// Pattern payload, base64 encoded
        #[arg(short, long, conflicts_with = "file")]
        pattern: Option<String>,

        /// Read the raw payload from a file and encode it
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },

    /// List queued patterns in arrival order
    List,

    /// Show the pattern at the head of the queue
    Head {
        /// Fetch only the payload, not id and name
        #[arg(long)]
        pattern_only: bool,
    },

    /// Remove and print the pattern at the head of the queue
    Pop {
        /// Return only the payload, not id and name
        #[arg(long)]
        pattern_only: bool,
    },
}

#[derive(Deserialize, Tabled)]
struct QueuedPattern {
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct DetailedPattern {
    id: String,
    name: String,
    pattern: String,
}

#[derive(Deserialize)]
struct PatternOnly {
    pattern: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the service's message out of a non-success response.
async fn service_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("unexpected response ({status})"),
    }
}

fn print_detailed(pattern: &DetailedPattern) {
    println!("  {} {}", "Id:".bold(), pattern.id);
    println!("  {} {}", "Name:".bold(), pattern.name);
    println!("  {} {}", "Pattern:".bold(), pattern.pattern);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Health => {
            let result = client.get(format!("{base}/health")).send().await;
            match result {
                Ok(response) if response.status().is_success() => {
                    println!("{}", "✓ Service is up".green().bold());
                }
                Ok(response) => {
                    anyhow::bail!("health check failed: {}", service_message(response).await);
                }
                Err(e) => {
                    anyhow::bail!("Failed to connect to service: {e}");
                }
            }
        }

        Commands::Submit {
            name,
            pattern,
            file,
        } => {
            let encoded = match (pattern, file) {
                (Some(encoded), None) => encoded,
                (None, Some(path)) => {
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    BASE64.encode(bytes)
                }
                _ => anyhow::bail!("Provide exactly one of --pattern or --file"),
            };

            let response = client
                .post(format!("{base}/patterns"))
                .json(&json!({ "name": name, "pattern": encoded }))
                .send()
                .await
                .context("Failed to connect to service")?;

            match response.status() {
                StatusCode::CREATED => {
                    let queued: QueuedPattern = response
                        .json()
                        .await
                        .context("Failed to parse response")?;

                    println!("{}", "✓ Pattern queued".green().bold());
                    println!();
                    println!("{}", Table::new(vec![queued]));
                }
                StatusCode::ACCEPTED => {
                    // Soft rejection: understood, declined by capacity
                    println!("{}", "○ Not queued".yellow().bold());
                    println!("  {}", service_message(response).await);
                }
                _ => {
                    anyhow::bail!("{}", service_message(response).await);
                }
            }
        }

        Commands::List => {
            let response = client
                .get(format!("{base}/patterns"))
                .send()
                .await
                .context("Failed to connect to service")?;

            if !response.status().is_success() {
                anyhow::bail!("{}", service_message(response).await);
            }

            let patterns: Vec<QueuedPattern> =
                response.json().await.context("Failed to parse response")?;

            if patterns.is_empty() {
                println!("{}", "Queue is empty".yellow());
            } else {
                println!("{}", Table::new(patterns));
            }
        }

        Commands::Head { pattern_only } => {
            let path = if pattern_only {
                "/patterns/head/pattern"
            } else {
                "/patterns/head"
            };
            let response = client
                .get(format!("{base}{path}"))
                .send()
                .await
                .context("Failed to connect to service")?;

            if !response.status().is_success() {
                anyhow::bail!("{}", service_message(response).await);
            }

            if pattern_only {
                let head: PatternOnly = response.json().await.context("Failed to parse response")?;
                println!("{}", head.pattern);
            } else {
                let head: DetailedPattern =
                    response.json().await.context("Failed to parse response")?;
                println!("{}", "Head of queue".cyan().bold());
                print_detailed(&head);
            }
        }

        Commands::Pop { pattern_only } => {
            let path = if pattern_only {
                "/patterns/head/pattern"
            } else {
                "/patterns/head"
            };
            let response = client
                .delete(format!("{base}{path}"))
                .send()
                .await
                .context("Failed to connect to service")?;

            if !response.status().is_success() {
                anyhow::bail!("{}", service_message(response).await);
            }

            if pattern_only {
                let removed: PatternOnly =
                    response.json().await.context("Failed to parse response")?;
                println!("{}", removed.pattern);
            } else {
                let removed: DetailedPattern =
                    response.json().await.context("Failed to parse response")?;
                println!("{}", "✓ Removed head of queue".green().bold());
                print_detailed(&removed);
            }
        }
    }

    Ok(())
}
