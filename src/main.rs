use clap::{Parser, Subcommand};
use std::sync::Arc;

use saku_search::application::search::SearchDispatcher;
use saku_search::domain::entities::SearchDomain;
use saku_search::infrastructure::config::Config;
use saku_search::infrastructure::fetchers::build_fetchers;
use saku_search::infrastructure::http::{router, AppState};

#[derive(Parser)]
#[command(name = "saku-search")]
#[command(about = "Universal search service for the Saku finance platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the search service
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_server(cli.config);
        }
        Commands::Version => {
            println!("saku-search v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config(cli.config);
        }
    }
}

fn run_server(config_path: String) {
    // Load config, falling back to environment-only configuration
    let config = if std::path::Path::new(&config_path).exists() {
        match Config::load(&config_path) {
            Ok(mut config) => {
                config.apply_env();
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            }
        }
    } else {
        Config::load_env()
    };

    tracing::info!(
        "Starting saku-search: timeout={}ms default-limit={}",
        config.search.timeout_ms,
        config.search.default_limit
    );
    for domain in SearchDomain::ALL {
        tracing::info!("  {} -> {}", domain, config.base_url(domain));
    }

    let client = match reqwest::Client::builder().timeout(config.timeout()).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let fetchers = build_fetchers(&config, &client);
    let dispatcher = Arc::new(SearchDispatcher::new(fetchers, config.timeout()));
    let state = AppState {
        dispatcher,
        default_limit: config.search.default_limit,
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async move {
        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!("Failed to bind {}: {}", addr, e);
                return;
            }
        };
        tracing::info!("Listening on {}", addr);

        let app = router(state);
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            tracing::error!("Server error: {}", e);
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}

fn init_config(path: String) {
    if std::path::Path::new(&path).exists() {
        eprintln!("Config already exists at {}", path);
        return;
    }

    match Config::default().save(&path) {
        Ok(()) => println!("Wrote default config to {}", path),
        Err(e) => eprintln!("Failed to write config: {}", e),
    }
}
