//! Command-line client for the deploy gateway.
//!
//! Reads a compiled artifact from disk and performs the same POST exchange
//! the frontend does, printing the resulting address and transaction hash,
//! or the error payload on failure.
//!
//! ```text
//! deploy-cli YOUR_API_KEY ./path_to_artifact.json eth_sepolia
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "deploy-cli")]
#[command(about = "Deploy a compiled contract artifact through the gateway", long_about = None)]
struct Cli {
    /// API key sent in the x-api-key header
    api_key: String,

    /// Path to the compiled artifact JSON ({"abi": [...], "bytecode": "0x..."})
    artifact_path: PathBuf,

    /// Target network identifier
    #[arg(default_value = "goerli")]
    network: String,

    /// Gateway base URL
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match deploy(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Deployment failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn deploy(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(&cli.artifact_path)?;
    let artifact: Value = serde_json::from_str(&raw)?;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_str(&cli.api_key)?);

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/deployContract", cli.url))
        .headers(headers)
        .json(&json!({ "artifact": artifact, "network": cli.network }))
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        // Surface the structured error payload to the operator.
        eprintln!("{}", failure_summary(status, &body));
        return Err("deployment rejected by gateway".into());
    }

    println!("{}", success_summary(&body));

    Ok(())
}

/// Operator-facing report for a non-2xx gateway response.
fn failure_summary(status: StatusCode, body: &Value) -> String {
    let mut lines = vec![format!("Gateway returned status {}", status)];
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        lines.push(format!("Message: {}", message));
    }
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        lines.push(format!("Error: {}", error));
    }
    lines.join("\n")
}

/// Operator-facing report for a successful deployment.
fn success_summary(body: &Value) -> String {
    format!(
        "Contract deployed at: {}\nTransaction Hash: {}",
        body.get("contractAddress")
            .and_then(Value::as_str)
            .unwrap_or("<missing>"),
        body.get("transactionHash")
            .and_then(Value::as_str)
            .unwrap_or("null")
    )
}
