// src/main.rs
// Entry point for the parser HTTP service

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kai_parser_lib::api::{create_api_router, AppState};
use kai_parser_lib::config::{AppConfig, ParserBackend};
use kai_parser_lib::parser::{LanguageModel, Parser, RemoteModel, RuleModel};
use kai_parser_lib::semantics::Lexicon;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Load configuration from environment
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting parser service...");

    let model: Arc<dyn LanguageModel> = match config.parser_backend {
        ParserBackend::Rules => Arc::new(RuleModel::new()),
        ParserBackend::Remote => {
            let remote = RemoteModel::new(
                &config.parser_endpoint,
                Duration::from_secs(config.request_timeout_secs),
            )
            .context("Failed to create remote parser client")?;
            info!("Using remote parser at {}", remote.endpoint());
            Arc::new(remote)
        }
    };

    let mut parser = Parser::new(model);
    if let Some(dir) = &config.semantics_dir {
        let lexicon = Lexicon::load_dir(dir)
            .with_context(|| format!("Failed to load semantics from {}", dir.display()))?;
        parser = parser.with_lexicon(Arc::new(lexicon));
    }

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.bind_address()))?;

    // Create application state and router
    let app_state = Arc::new(AppState::new(parser, config));
    let app = create_api_router(app_state);

    // Start server
    info!("Starting parser API server on {}", addr);
    axum::Server::try_bind(&addr)
        .with_context(|| format!("Failed to bind {}", addr))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Parser service shutting down");

    Ok(())
}
