/// Vidshelf Server - video catalog with ordered playlists
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidshelf_server::{config::ServerConfig, create_router, state::AppState, VideoScanner};
use vidshelf_storage::LocalCatalog;

#[derive(Parser)]
#[command(name = "vidshelf-server")]
#[command(about = "Video catalog and playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Register every video file found under a directory
    Scan {
        /// Directory to scan (defaults to the configured public directory)
        path: Option<PathBuf>,

        /// Descend into symlinked directories and register symlinked files
        #[arg(long)]
        follow_links: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "vidshelf_server=info,vidshelf_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Scan {
            path,
            follow_links,
            config,
        } => {
            scan_directory(path, follow_links, config).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Vidshelf Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let catalog = Arc::new(
        LocalCatalog::open(
            &config.storage.database_url,
            config.storage.max_connections,
        )
        .await?,
    );
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(catalog.clone());
    let app = create_router(app_state, &config.media.public_dir);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    catalog.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn scan_directory(
    path: Option<PathBuf>,
    follow_links: bool,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    let root = path.unwrap_or_else(|| config.media.public_dir.clone());
    tracing::info!("Scanning {}", root.display());

    let catalog = LocalCatalog::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;

    let scanner = VideoScanner::new().follow_links(follow_links);
    let result = match scanner.scan_directory(&root) {
        Ok(videos) => {
            tracing::info!("Found {} video files", videos.len());
            scanner.register_all(&catalog, videos).await
        }
        Err(e) => Err(e),
    };

    catalog.close().await;

    let report = result?;
    tracing::info!(
        registered = report.registered,
        skipped = report.skipped,
        "Scan complete"
    );

    Ok(())
}
