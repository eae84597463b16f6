//! showbill-web - listings service for venues, artists and shows
//!
//! Resolves configuration (command line / environment, then the TOML config
//! file, then compiled defaults), opens the database and serves the HTML
//! pages until Ctrl+C or SIGTERM.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use showbill_common::config::{CompiledDefaults, ConfigOverrides, ServiceConfig, TomlConfig};
use showbill_common::db::{init_database, init_database_file};
use showbill_common::seed::seed_demo_data;
use showbill_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for showbill-web
#[derive(Parser, Debug)]
#[command(name = "showbill-web")]
#[command(about = "Venue, artist and show listings")]
#[command(version)]
struct Args {
    /// Config file (default: <config dir>/showbill/config.toml)
    #[arg(short, long, env = "SHOWBILL_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Full database URL; overrides --db-dir / --db-name
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Directory holding the database file
    #[arg(long, env = "DB_DIR")]
    db_dir: Option<PathBuf>,

    /// Database name (file is <name>.db)
    #[arg(long, env = "DB_NAME")]
    db_name: Option<String>,

    /// Log level or filter directive (RUST_LOG wins when set)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Append logs to this file instead of stdout
    #[arg(long, env = "LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Load demo venues, artists and shows into an empty database
    #[arg(long)]
    seed_demo: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            db_dir: self.db_dir.clone(),
            db_name: self.db_name.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(TomlConfig::default_path);
    let file_config = match &config_path {
        Some(path) => TomlConfig::load_or_default(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?,
        None => TomlConfig::default(),
    };
    let config = ServiceConfig::resolve(
        args.overrides(),
        file_config,
        CompiledDefaults::for_current_platform(),
    )?;

    init_tracing(&config)?;

    // Build identity first, before any database work
    info!(
        "Starting showbill-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => info!("No config file at {} (using defaults)", path.display()),
        None => warn!("No config directory on this platform (using defaults)"),
    }

    let pool = match &config.database.url {
        Some(url) => {
            info!("Database URL: {}", url);
            init_database(url).await
        }
        None => init_database_file(&config.database.database_path()).await,
    };
    let pool = match pool {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    if args.seed_demo {
        if seed_demo_data(&pool).await.context("Failed to seed demo data")? {
            info!("Loaded demo data");
        } else {
            info!("Database already has venues; demo data skipped");
        }
    }

    let app = build_router(AppState::new(pool.clone()));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("showbill-web listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// fmt subscriber filtered by RUST_LOG, else the configured level
fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
