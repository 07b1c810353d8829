use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

pub mod books;
pub mod movies;
pub mod state;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/recommend", post(movies::recommend))
        .route("/books", get(books::list))
        .route("/books/popular", get(books::popular))
        .route("/books/recommend", post(books::recommend))
}

/// Service metadata
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Movie & Book Recommender API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "movies": {
                "list": "/api/movies",
                "recommend": "/api/recommend"
            },
            "books": {
                "list": "/api/books",
                "popular": "/api/books/popular",
                "recommend": "/api/books/recommend"
            }
        }
    }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Turns a handler panic into a generic 500 response
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "Unexpected error".to_string()
    };

    AppError::Internal(detail).into_response()
}
