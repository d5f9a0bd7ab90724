//! ProbModelSEED CLI - Command-line interface for the ProbModelSEED service

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use probmodelseed_sdk::{ClientConfig, ProbModelSeedClient, SdkError, DEFAULT_URL, METHODS};
use std::process::ExitCode;
use std::time::Duration;
use tabled::{Table, Tabled};
use tracing::debug;

#[derive(Parser)]
#[command(name = "probmodelseed")]
#[command(about = "ProbModelSEED JSON-RPC client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Service endpoint URL
    #[arg(long, env = "PROBMODELSEED_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Authorization token
    #[arg(long, env = "PROBMODELSEED_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// User id paired with the token
    #[arg(long, env = "PROBMODELSEED_USER_ID")]
    user_id: Option<String>,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, env = "PROBMODELSEED_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log format: pretty or json
    #[arg(long, env = "PROBMODELSEED_LOG_FORMAT")]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the remote methods this client knows
    Methods,

    /// Call a remote method
    Call {
        /// Wire method name (e.g. list_models, ModelReconstruction)
        method: String,

        /// Input object as JSON string
        #[arg(short, long, default_value = "{}")]
        input: String,
    },
}

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "method")]
    name: &'static str,
    #[tabled(rename = "rust")]
    rust_name: &'static str,
    #[tabled(rename = "returns")]
    returns: u8,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.url.clone(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            user_id: self.user_id.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn print_methods() {
    let rows: Vec<MethodRow> = METHODS
        .iter()
        .map(|m| MethodRow {
            name: m.name,
            rust_name: m.rust_name,
            returns: m.arity.count(),
        })
        .collect();

    println!("{}", format!("{} methods", rows.len()).cyan().bold());
    println!("{}", Table::new(rows));
}

async fn call(config: &ClientConfig, method: &str, input: &str) -> Result<serde_json::Value, CliError> {
    let input: serde_json::Value = serde_json::from_str(input)
        .context("Invalid JSON input")
        .map_err(CliError::Usage)?;

    let client = ProbModelSeedClient::from_config(config).map_err(CliError::Rpc)?;
    debug!(url = %client.url(), method, "Calling");

    client.call(method, input).await.map_err(CliError::Rpc)
}

enum CliError {
    Usage(anyhow::Error),
    Rpc(SdkError),
}

fn report(err: &CliError) {
    match err {
        CliError::Usage(e) => eprintln!("{} {:#}", "✗".red(), e),
        CliError::Rpc(e) => {
            let class = match e.status() {
                Some(status) => format!("[{}]", status),
                None => "[client]".to_string(),
            };
            eprintln!("{} {} {}", "✗".red(), class.bold(), e);
            if let Some(body) = e.raw_body() {
                eprintln!("  {} {}", "Response:".bold(), body);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(logging::LogFormat::from_env_value(cli.log_format.as_deref()))?;

    match &cli.command {
        Commands::Methods => print_methods(),

        Commands::Call { method, input } => {
            let config = cli.client_config();
            match call(&config, method, input).await {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Err(e) => {
                    report(&e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
