// rest/mod.rs — Public REST API server.
//
// Axum HTTP server bridging the journaling platform to the gamification
// engine.
//
// Endpoints:
//   GET  /api/v1/health
//   GET  /api/v1/achievements
//   GET  /api/v1/users/{user_id}/status
//   POST /api/v1/users/{user_id}/entries

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/v1/health", get(routes::health::health))
        .route(
            "/api/v1/achievements",
            get(routes::achievements::list_achievements),
        )
        .route(
            "/api/v1/users/{user_id}/status",
            get(routes::status::get_status),
        )
        .route(
            "/api/v1/users/{user_id}/entries",
            post(routes::entries::create_entry),
        )
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
