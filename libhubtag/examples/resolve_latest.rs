//! Basic usage example for the hubtag library.
//!
//! Resolves which tags of an official image currently share the `latest`
//! digest and prints the result as JSON.
//!
//! Run with: cargo run --example resolve_latest

use libhubtag::Hub;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image = "telegraf";

    let hub = Hub::new()?;

    println!("Resolving {}:latest ...", image);
    match hub.resolve_latest(image).await {
        Ok(resolved) => {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Err(e) => {
            eprintln!("✗ Resolution failed: {}", e);
            eprintln!("  The hub may be unreachable, or the image may have no 'latest' tag.");
        }
    }

    Ok(())
}
