//! Restaurant directory and review server library
//!
//! This module exports the router, state and persistence helpers for the
//! server binary, the seeding binary and the integration tests.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod listing;
pub mod models;
pub mod routes;
pub mod seed;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given pool and configuration
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    use routes::*;

    Router::new()
        .route("/health", get(health_check))
        .route("/stores", get(list_stores).post(create_store))
        .route("/stores/:id", get(get_store).delete(delete_store))
        .route("/stores/:id/reviews", post(create_review))
        .route("/reviews/:id", delete(delete_review))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
