use crate::config::Config;
use crate::handlers;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::hello_handler))
        .layer(TraceLayer::new_for_http())
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let app = build_router();

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("hello-app listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
