//! ATP Trading Dashboard
//!
//! Stub trading API plus a terminal dashboard that polls it: summary
//! metrics, cumulative-PnL equity curve, and a trade history table.

mod api;
mod dashboard;
mod models;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::api::ApiClient;
use crate::dashboard::Dashboard;
use crate::server::ServerConfig;

/// ATP trading dashboard CLI.
#[derive(Parser)]
#[command(name = "atp-dashboard")]
#[command(about = "Stub trading API and terminal dashboard", long_about = None)]
struct Cli {
    /// Base URL of the stub API
    #[arg(long, env = "ATP_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the stub API server
    Serve {
        /// Host to bind to
        #[arg(long, env = "ATP_API_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "ATP_API_PORT", default_value = "8000")]
        port: u16,
    },

    /// Render the full dashboard (connection, metrics, chart, history)
    Dashboard {
        /// Re-render every N seconds until Ctrl+C
        #[arg(short, long)]
        refresh: Option<u64>,
    },

    /// Show the performance metrics view
    Metrics,

    /// Show the equity curve view
    Chart,

    /// Show the trade history view
    History,

    /// Start a trading session
    Session {
        /// Session parameters as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },

    /// Add an analysis result for a ticker
    Analyze {
        /// Ticker symbol
        ticker: String,

        /// Analysis payload as a JSON object
        #[arg(short, long, default_value = "{}")]
        data: String,
    },

    /// Record a trade outcome
    Outcome {
        /// Analysis id the outcome belongs to
        analysis_id: i64,

        /// Outcome label (e.g. HIT_TARGET, STOPPED_OUT)
        outcome: String,

        /// Exit price
        #[arg(short, long)]
        exit_price: Option<f64>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve { host, port } => {
            info!(host = %host, port = port, "Starting stub API server");
            server::run(ServerConfig { host, port }).await?;
        }

        Commands::Dashboard { refresh } => {
            let client = ApiClient::with_base_url(cli.api_url)?;
            let dashboard = Dashboard::new(client);
            dashboard.run(refresh).await?;
        }

        Commands::Metrics => {
            let client = ApiClient::with_base_url(cli.api_url)?;
            let dashboard = Dashboard::new(client);
            println!("{}", dashboard.metrics_view().await);
        }

        Commands::Chart => {
            let client = ApiClient::with_base_url(cli.api_url)?;
            let dashboard = Dashboard::new(client);
            println!("{}", dashboard.chart_view().await);
        }

        Commands::History => {
            let client = ApiClient::with_base_url(cli.api_url)?;
            let dashboard = Dashboard::new(client);
            println!("{}", dashboard.history_view().await);
        }

        Commands::Session { params } => {
            let params: Value = serde_json::from_str(&params)?;
            let client = ApiClient::with_base_url(cli.api_url)?;

            let ack = client.start_session(&params).await?;
            println!("Session started: {}", ack.session_id);
            println!("Status:          {}", ack.status);
            println!("Params:          {}", ack.params);
        }

        Commands::Analyze { ticker, data } => {
            let data: Value = serde_json::from_str(&data)?;
            let client = ApiClient::with_base_url(cli.api_url)?;

            let ack = client.add_analysis(&ticker, &data).await?;
            println!("Analysis added: id {}", ack.id);
            println!("Ticker:         {}", ack.ticker);
            println!("Status:         {}", ack.status);
            println!("Data:           {}", ack.data);
        }

        Commands::Outcome {
            analysis_id,
            outcome,
            exit_price,
            notes,
        } => {
            let client = ApiClient::with_base_url(cli.api_url)?;

            let ack = client
                .record_outcome(analysis_id, &outcome, exit_price, notes.as_deref())
                .await?;
            println!(
                "Outcome recorded for analysis {}: {} (success: {})",
                ack.analysis_id, ack.outcome, ack.success
            );
        }
    }

    Ok(())
}
