use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_handler, delete_handler, health_handler, index_handler, modify_handler,
    redirect_handler,
};
use crate::state::AppState;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let assets = ServeDir::new(&state.config().static_dir);

        Router::new()
            .route("/create", any(create_handler))
            .route("/delete", any(delete_handler))
            .route("/modify", any(modify_handler))
            .route("/health", get(health_handler))
            .route("/", any(index_handler))
            .route("/{*path}", any(redirect_handler))
            .nest_service("/static", assets)
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            .with_state(state)
    }
}
