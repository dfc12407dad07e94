/// Melody Server - in-memory playlist service
use clap::{Parser, Subcommand};
use melody_server::{config::ServerConfig, create_router, state::AppState};
use melody_storage::MemoryStorage;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "melody-server")]
#[command(about = "Melody playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "MELODY_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    ShowConfig {
        /// Configuration file path
        #[arg(short, long, env = "MELODY_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "melody_server=info,melody_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ShowConfig { config } => {
            show_config(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Melody Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let storage = MemoryStorage::with_secret_code_length(config.accounts.secret_code_length);
    tracing::info!(
        "In-memory storage ready (secret codes of {} characters)",
        storage.secret_code_length()
    );

    // Build application state
    let app_state = AppState::new(Arc::new(storage));

    // Build router
    let app = create_router(app_state, &config.server);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn show_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
