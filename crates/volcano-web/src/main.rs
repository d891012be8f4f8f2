//! Prompt studio API server.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p volcano-web
//! cargo run -p volcano-web -- --port 8080 --config engine.json
//! cargo run -p volcano-web -- --static-dir ../studio/out
//! ```
//!
//! Then drive it from the frontend, or with curl:
//!
//! ```bash
//! curl -X POST localhost:3001/api/subject -H 'content-type: application/json' \
//!   -d '{"subject": "a fox"}'
//! curl -X POST localhost:3001/api/descriptors -H 'content-type: application/json' \
//!   -d '{"token": "golden hour"}'
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use volcano_engine::{Engine, EngineConfig, StudioState};
use volcano_web::{WebConfig, spawn_web};

/// Prompt studio API server.
#[derive(Parser)]
#[command(about = "HTTP API for the Volcano prompt studio")]
struct Args {
    /// Port for the API server.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Engine config file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Serve a static frontend build from this directory.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();

    let config = EngineConfig::load_or_default(args.config.as_deref())?;
    let studio = Arc::new(Mutex::new(StudioState::from_config(&config)));

    let web_config = WebConfig {
        bind_addr: ([127, 0, 0, 1], args.port).into(),
        static_dir: args.static_dir,
    };
    let addr = spawn_web(studio, Engine::new(&config), web_config).await?;
    println!("Studio API: http://{addr}");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to listen for shutdown signal: {e}"))?;
    info!("Shutting down");
    Ok(())
}
