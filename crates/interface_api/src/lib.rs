//! HTTP API Layer
//!
//! This crate provides the REST API for the expense splitter using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for participants, expenses, and balances
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//! - **Snapshot**: Optional JSON persistence of the expense book
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(ExpenseBook::new()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod snapshot;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_split::ExpenseBook;

use crate::middleware::request_logging;
use crate::handlers::{balances, expenses, health, participants};

/// Application state shared across handlers
///
/// Every request goes through the lock, so a balance query always sees a
/// consistent book.
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<RwLock<ExpenseBook>>,
}

impl AppState {
    /// Wraps a book for sharing across handlers
    pub fn new(book: ExpenseBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared expense book
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/data", get(expenses::get_data))
        .route("/participants", post(participants::add_participant))
        .route("/participants/:name", delete(participants::remove_participant))
        .route("/expenses", post(expenses::add_expense))
        .route("/expenses/:id", delete(expenses::delete_expense))
        .route("/clear", post(expenses::clear_expenses))
        .route("/balances", get(balances::get_balances))
        .route("/stats", get(balances::get_stats));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
