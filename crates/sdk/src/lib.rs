//! ProbModelSEED SDK - Rust Client Library
//!
//! JSON-RPC 1.1 client for the ProbModelSEED metabolic model reconstruction
//! service. Each remote method takes a single JSON input object and resolves
//! to the value the service returns.
//!
//! # Example
//!
//! ```no_run
//! use probmodelseed_sdk::{ClientConfig, ProbModelSeedClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PROBMODELSEED_URL / PROBMODELSEED_TOKEN
//!     let client = ProbModelSeedClient::from_config(&ClientConfig::from_env()?)?;
//!
//!     let jobs = client.check_jobs(json!({})).await?;
//!     println!("Jobs: {}", jobs);
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod invoker;
mod methods;
mod types;

pub use auth::TokenProvider;
pub use client::{ClientBuilder, ProbModelSeedClient};
pub use config::{ClientConfig, DEFAULT_URL};
pub use error::{ErrorPayload, Result, SdkError, STATUS_MALFORMED, STATUS_TRANSPORT, UNKNOWN_ERROR};
pub use invoker::RpcCall;
pub use methods::{find_method, METHODS};
pub use types::{AuthInfo, ReturnArity, RpcMethod, RpcRequest, JSONRPC_VERSION, SERVICE_NAME};
