use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;

use crate::{ReportError, router::ReportState};

#[derive(Serialize)]
pub struct CounterResponse {
    pub counter: i64,
}

/// GET /counter -> bump the singleton counter and return the new value.
pub async fn counter(
    State(state): State<ReportState>,
) -> Result<Json<CounterResponse>, ReportError> {
    let counter = state.storage.increment_and_get_counter().await?;
    Ok(Json(CounterResponse { counter }))
}

/// GET /test -> whatever the injected probe computes.
pub async fn probe(State(state): State<ReportState>) -> Json<Value> {
    Json(state.probe.value())
}
