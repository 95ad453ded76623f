use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the HTTP server with all routes and middleware
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::hello_handler))
        .route("/authenticate", post(handlers::authenticate_handler))
        .layer(TraceLayer::new_for_http())
}
