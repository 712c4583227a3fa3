//! Phonebook service.
//!
//! ```text
//!   client ──▶ CORS ─▶ request id ─▶ trace ─▶ timeout ─▶ body limit ─▶ access log
//!                                                                        │
//!                         ┌──────────────────────────────────────────────┘
//!                         ▼
//!            /, /info, /api/persons[/{id}] ──▶ PersonStore (in memory)
//!            anything else                 ──▶ static files (build/)
//! ```
//!
//! The collection is seeded at start and lost on exit.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use phonebook::config::resolve_config;
use phonebook::lifecycle::{shutdown_signal, Shutdown};
use phonebook::observability::{logging, metrics};
use phonebook::{HttpServer, PersonStore};

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "In-memory phonebook HTTP service", long_about = None)]
struct Args {
    /// TOML configuration file (also read from PHONEBOOK_CONFIG).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port; overrides the file and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), args.port)?;

    logging::init_logging(&config.observability);
    tracing::info!("phonebook v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = PersonStore::seeded();
    tracing::info!(records = store.len(), "Phonebook seeded");

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
