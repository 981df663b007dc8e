//! Course consultant backend
//!
//! Answers course questions over HTTP: the question is matched against a small
//! static course catalog, the matches are rendered as facts into a consultant
//! prompt, and the prompt is sent to Gemini.

pub mod catalog;
pub mod config;
pub mod consultant;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::catalog::CourseCatalog;
use crate::consultant::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CourseCatalog>,
    /// `None` when no API key was configured
    pub completion: Option<Arc<dyn CompletionClient>>,
}

impl AppState {
    pub fn new(catalog: CourseCatalog, completion: Option<Arc<dyn CompletionClient>>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            completion,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
