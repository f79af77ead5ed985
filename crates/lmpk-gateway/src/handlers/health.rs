use axum::extract::State;
use axum::Json;
use tracing::warn;

use crate::model::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let records = match state.store().count().await {
        Ok(count) => Some(count),
        Err(err) => {
            warn!(error = %err, "health check could not count records");
            None
        }
    };

    Json(HealthResponse {
        status: if records.is_some() { "ok" } else { "degraded" },
        started_at: state.started_at(),
        records,
    })
}
