//! Simple SDK Example
//!
//! Lists the caller's models and polls their jobs.
//!
//! # Usage
//!
//! ```bash
//! PROBMODELSEED_TOKEN="un=alice|tokenid=..." PROBMODELSEED_USER_ID=alice \
//!     cargo run --example simple
//! ```

use probmodelseed_sdk::{ClientConfig, ProbModelSeedClient};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ProbModelSEED SDK - Simple Example");
    println!("==================================\n");

    // 1. Build client from environment
    let config = ClientConfig::from_env()?;
    println!("1. Using endpoint {}", config.url);
    let client = ProbModelSeedClient::from_config(&config)?;

    // 2. List models in the user's home
    println!("2. Listing models...");
    let path = format!("/{}/home/models", client.user_id());
    let models = client.list_models(json!({ "path": path })).await?;
    println!("{}\n", serde_json::to_string_pretty(&models)?);

    // 3. Poll jobs
    println!("3. Checking jobs...");
    match client.check_jobs(json!({})).await {
        Ok(jobs) => println!("{}", serde_json::to_string_pretty(&jobs)?),
        Err(e) => println!("   check_jobs failed (status {:?}): {}", e.status(), e),
    }

    Ok(())
}
