mod config;
mod content;
mod errors;
mod export;
mod routes;
mod site;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::ContentStore;
use crate::export::export_site;
use crate::routes::build_router;
use crate::site::contact::SimulatedTransport;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio site server and static exporter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve,
    /// Pre-render every page into a directory
    Export {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    // Content is read once; nothing touches the disk after this
    let content = Arc::new(ContentStore::load(&config.content_dir).await?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, content).await,
        Command::Export { out } => {
            let report = export_site(&content, &config, &out).await?;
            info!(
                "Exported {} pages and {} assets to {}",
                report.pages,
                report.assets,
                out.display()
            );
            Ok(())
        }
    }
}

async fn serve(config: Config, content: Arc<ContentStore>) -> Result<()> {
    let contact = Arc::new(SimulatedTransport {
        delay: config.contact_delay,
    });
    info!(
        "Contact form uses simulated delivery ({} ms delay)",
        config.contact_delay.as_millis()
    );

    let state = AppState {
        content,
        config: config.clone(),
        contact,
    };

    let app = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
