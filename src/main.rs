//! hello-gitops: single-page web server.
//!
//! This is the application entry point. It loads configuration from a TOML file,
//! initializes tracing, builds the Axum router and runs the HTTP server until a
//! termination signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hello_gitops::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hello_gitops::http::start_server;
use hello_gitops::routes::create_router;
use hello_gitops::state::AppState;

/// hello-gitops: serves a static page on port 8080
#[derive(Parser, Debug)]
#[command(name = "hello-gitops", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hello_gitops=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.port from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging format lives in the config file, so load it before tracing is up
    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = %args.config,
        host = %config.http.host,
        port = config.http.port,
        index_file = %config.site.index_file,
        static_dir = config.site.serve_static.then_some(config.site.static_dir.as_str()),
        "Loaded configuration"
    );

    if !config.site.index_path().is_file() {
        tracing::warn!(
            index_file = %config.site.index_file,
            "Index file not found; / will return 404 until it exists"
        );
    }

    let app = create_router(AppState::new(config.clone()));
    start_server(app, &config).await?;

    Ok(())
}
