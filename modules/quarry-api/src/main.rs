use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quarry_common::Config;
use quarry_extract::ExtractService;

mod rest;

pub struct AppState {
    pub extract: Arc<ExtractService>,
    pub tavily_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quarry=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        extract: Arc::new(ExtractService::new()),
        tavily_api_key: config.tavily_api_key,
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Content extraction
        .route("/api/v1/pdf-scraper", post(rest::pdf_scraper))
        .route("/api/v1/arxiv-scraper", post(rest::arxiv_scraper))
        .route("/api/v1/wikipedia-scraper", post(rest::wikipedia_scraper))
        .route("/api/v1/web-scraper", post(rest::web_scraper))
        .route("/api/v1/scrape-urls", post(rest::scrape_urls))
        // Search
        .route("/api/v1/ddg-search", post(rest::ddg_search))
        .route("/api/v1/tavily-search", post(rest::tavily_search))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Quarry API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
