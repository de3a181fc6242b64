// src/api/handlers.rs

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::response::{api_error, api_success, parser_error_status, ApiResult, ParseFailure};
use crate::config::AppConfig;
use crate::parser::{DependencyTree, ParseResponse, Parser};

// Application state shared across request handlers
pub struct AppState {
    pub parser: Parser,
    pub config: AppConfig,
    pub start_time: DateTime<Utc>,
    pub stats: Mutex<ParseStats>,
}

impl AppState {
    pub fn new(parser: Parser, config: AppConfig) -> Self {
        Self {
            parser,
            config,
            start_time: Utc::now(),
            stats: Mutex::new(ParseStats::default()),
        }
    }
}

// Request counters reported by the health endpoint
#[derive(Debug, Default, Clone, Serialize)]
pub struct ParseStats {
    pub requests: u64,
    pub failures: u64,
    pub sentences: u64,
    pub tokens: u64,
    pub total_processing_ms: u64,
}

impl ParseStats {
    pub fn record_success(&mut self, sentences: usize, tokens: usize, processing_ms: u64) {
        self.requests += 1;
        self.sentences += sentences as u64;
        self.tokens += tokens as u64;
        self.total_processing_ms += processing_ms;
    }

    pub fn record_failure(&mut self) {
        self.requests += 1;
        self.failures += 1;
    }

    // Average time per successful request
    pub fn avg_processing_ms(&self) -> f64 {
        let succeeded = self.requests - self.failures;
        if succeeded == 0 {
            return 0.0;
        }
        self.total_processing_ms as f64 / succeeded as f64
    }
}

// Bracketed dependency trees, one per sentence
#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub processing_time: u64,
    pub trees: Vec<String>,
}

pub fn create_api_router(app_state: Arc<AppState>) -> Router {
    // Any origin may call the parse routes
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let parse_routes = Router::new()
        .route("/parse", post(parse))
        .route("/parse/tree", post(parse_tree))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .merge(parse_routes)
        .layer(DefaultBodyLimit::max(app_state.config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index() -> &'static str {
    "parser service layer"
}

// curl -H "Content-Type: text/plain" -X POST --data "@test.txt" http://localhost:9000/parse
async fn parse(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ParseResponse>, ParseFailure> {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    let text = state.parser.cleanup_text(&body);

    match state.parser.parse_document(&text).await {
        Ok(sentence_list) => {
            let processing_time = started.elapsed().as_millis() as u64;
            let response = ParseResponse::new(sentence_list, processing_time);
            state.stats.lock().await.record_success(
                response.num_sentences,
                response.num_tokens,
                processing_time,
            );
            info!(
                "Request {}: {} bytes, {} sentences, {} tokens in {}ms",
                request_id,
                body.len(),
                response.num_sentences,
                response.num_tokens,
                processing_time
            );
            Ok(Json(response))
        }
        Err(e) => {
            error!("Request {}: parse failed: {}", request_id, e);
            state.stats.lock().await.record_failure();
            Err(ParseFailure(e))
        }
    }
}

async fn parse_tree(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult<TreeResponse> {
    let started = Instant::now();
    let text = state.parser.cleanup_text(&body);

    let sentence_list = match state.parser.parse_document(&text).await {
        Ok(sentence_list) => sentence_list,
        Err(e) => {
            error!("Tree parse failed: {}", e);
            state.stats.lock().await.record_failure();
            return api_error(parser_error_status(&e), e.to_string());
        }
    };

    let mut trees = Vec::with_capacity(sentence_list.len());
    for sentence in &sentence_list {
        match DependencyTree::from_sentence(sentence) {
            Ok(tree) => trees.push(tree.to_bracketed()),
            Err(e) => {
                error!("Could not build dependency tree: {}", e);
                state.stats.lock().await.record_failure();
                return api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
            }
        }
    }

    let processing_time = started.elapsed().as_millis() as u64;
    let tokens = sentence_list.iter().map(|s| s.len()).sum();
    state
        .stats
        .lock()
        .await
        .record_success(sentence_list.len(), tokens, processing_time);

    api_success(TreeResponse {
        processing_time,
        trees,
    })
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.stats.lock().await.clone();
    let uptime = (Utc::now() - state.start_time).num_seconds().max(0);

    Json(json!({
        "status": "healthy",
        "backend": state.parser.backend(),
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.start_time.to_rfc3339(),
        "uptime_seconds": uptime,
        "stats": {
            "requests": stats.requests,
            "failures": stats.failures,
            "sentences": stats.sentences,
            "tokens": stats.tokens,
            "avg_processing_time_ms": stats.avg_processing_ms(),
        }
    }))
}
