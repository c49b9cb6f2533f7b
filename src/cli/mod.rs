use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "calc-mcp-gateway")]
#[command(about = "Calculator MCP server (runs until interrupted when no subcommand is given)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check a running server
    Health {
        /// Server URL to check
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
    },
    /// Validate configuration without starting the server
    Config {
        #[arg(long)]
        validate: bool,
    },
    /// Show server status and the tool catalog availability
    Status {
        /// Server URL to check
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
    },
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("server is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let (builder, _rid) = crate::infra::http::headers::add_standard_headers(
        client.get(format!("{}/healthz", url)),
        None,
    );
    let response = builder
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
    if !matches!(mode.as_str(), "server" | "stdio") {
        return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", mode).into());
    }

    if mode == "server" {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8000);
        if port == 0 {
            return Err("PORT cannot be 0".into());
        }
    }

    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "health: {}",
        if health_response.status().is_success() {
            "healthy"
        } else {
            "unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{}/rpc", url))
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools.list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            println!("tools: available");
        }
        Ok(resp) => {
            println!("tools: HTTP {}", resp.status());
        }
        Err(_) => {
            println!("tools: unavailable");
        }
    }

    println!("configuration:");
    println!(
        "  mode: {}",
        std::env::var("MODE").unwrap_or_else(|_| "server".into())
    );
    println!(
        "  port: {}",
        std::env::var("PORT").unwrap_or_else(|_| "8000".into())
    );
    println!(
        "  log level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    Ok(())
}
