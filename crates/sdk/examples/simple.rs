//! Simple SDK Example
//!
//! Submits a pattern, lists the queue, then drains the head.
//!
//! # Usage
//!
//! Start a server (`drumline-server`), then:
//! `cargo run -p drumline-sdk --example simple`

use drumline_sdk::{DrumlineClient, NewPattern, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DrumlineClient::new("http://127.0.0.1:8080")?;

    client.health().await?;
    println!("service is up");

    let outcome = client
        .submit(NewPattern {
            name: "Billie Jean".to_string(),
            pattern: "fwAAAH8AAAB/AAAAfwAAAA==".to_string(),
        })
        .await?;

    match outcome {
        SubmitOutcome::Queued(queued) => println!("queued as {}", queued.id),
        SubmitOutcome::QueueFull => println!("queue full, try again later"),
    }

    for entry in client.list().await? {
        println!("{}  {}", entry.id, entry.name);
    }

    let head = client.peek_head().await?;
    println!("head: {} ({})", head.name, head.id);

    let removed = client.pop_head().await?;
    println!("removed: {}", removed.name);

    Ok(())
}
