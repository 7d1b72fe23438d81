use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, options},
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod files;
mod health;

pub fn router(state: AppState) -> Router {
    // CORS is unconditional: every response carries the same three headers,
    // and any OPTIONS request short-circuits to 204.
    Router::new()
        .route("/health", get(health::health_check))
        .route("/", options(files::preflight))
        .route(
            "/{*path}",
            get(files::download)
                .put(files::upload)
                .options(files::preflight),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, PUT, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
