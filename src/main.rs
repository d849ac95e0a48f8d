//! Reliefboard Server
//!
//! Run with: cargo run -- --database ./data/DisasterResponse.db
//!
//! # Configuration
//!
//! Config file locations (first found wins), then environment overrides:
//! - `$XDG_CONFIG_HOME/reliefboard/config.toml`
//! - `/etc/reliefboard/config.toml`
//! - `./config.toml`
//!
//! Environment variables:
//! - `RELIEFBOARD_DATABASE`: SQLite database path
//! - `RELIEFBOARD_HOST` / `RELIEFBOARD_PORT`: bind address
//! - `RELIEFBOARD_CLASSIFIER_URL`: model server URL (enables the classifier)
//! - `RELIEFBOARD_LOG_LEVEL` / `RELIEFBOARD_LOG_FORMAT`: logging
//! - `RUST_LOG`: overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use reliefboard::api::{serve, AppState};
use reliefboard::classifier::{Classifier, ClassifierClient, ClassifierConfig};
use reliefboard::config::Config;
use reliefboard::dataset::load_dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Disaster Response Dashboard server
#[derive(Parser, Debug)]
#[command(name = "reliefboard", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database with the model_data table
    #[arg(long)]
    database: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Classifier model server URL
    #[arg(long)]
    classifier_url: Option<String>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", reliefboard::config::generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    apply_cli_overrides(&mut config, &cli);

    init_tracing(&config);

    tracing::info!("Starting Reliefboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.dataset.database_path);

    // One-time data load; everything after this is in-memory
    let dataset = Arc::new(
        load_dataset(std::path::Path::new(&config.dataset.database_path))
            .context("Failed to load dataset")?,
    );
    tracing::info!(
        "Loaded {} messages across {} genres with {} categories",
        dataset.len(),
        dataset.genres().len(),
        dataset.categories().len()
    );

    let state = if config.classifier.enabled {
        tracing::info!("Classifier integration enabled: {}", config.classifier.url);

        let client = Arc::new(ClassifierClient::new(ClassifierConfig {
            base_url: config.classifier.url.clone(),
            request_timeout_ms: config.classifier.request_timeout_ms,
            max_retries: config.classifier.max_retries,
        }));

        match client.health_check().await {
            Ok(()) => tracing::info!("Classifier connection verified"),
            Err(e) => tracing::warn!(
                "Classifier not available: {} (classify will fall back to demo labels)",
                e
            ),
        }

        AppState::with_classifier(Arc::clone(&dataset), config.api.clone(), client)
    } else {
        tracing::info!(
            "Classifier disabled (set RELIEFBOARD_CLASSIFIER_URL to enable); \
             classify serves demo labels"
        );
        AppState::new(Arc::clone(&dataset), config.api.clone())
    };

    serve(state, &config.api).await?;

    tracing::info!("Reliefboard stopped");
    Ok(())
}

/// CLI flags win over config file and environment
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref db) = cli.database {
        config.dataset.database_path = db.to_string_lossy().to_string();
    }
    if let Some(ref host) = cli.host {
        config.api.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(ref url) = cli.classifier_url {
        config.classifier.url = url.clone();
        config.classifier.enabled = true;
    }
}

/// Initialize tracing from the logging config
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "reliefboard={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
