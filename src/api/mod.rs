mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::store::Store;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    /// One client for all upstream calls; reqwest pools connections.
    pub http: reqwest::Client,
    pub store: Store,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            store: Store::new(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Grading (POST only; axum answers 405 for anything else)
        .route("/grade", post(handlers::grade))
        // Templates
        .route("/templates", get(handlers::list_templates))
        .route("/templates", post(handlers::save_template))
        .route("/templates/{id}", get(handlers::get_template))
        // Rubrics
        .route("/rubrics", get(handlers::list_rubrics))
        .route("/rubrics", post(handlers::save_rubric))
        .route("/rubrics/{id}", get(handlers::get_rubric))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
