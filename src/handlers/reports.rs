use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::debug;

use crate::{ReportError, router::ReportState};

/// GET /html/{date} -> the stored report for an exact calendar date.
pub async fn html_by_date(
    State(state): State<ReportState>,
    Path(date): Path<String>,
) -> Result<Html<String>, ReportError> {
    let snapshot = state.storage.get_snapshot(&date).await?;
    Ok(Html(snapshot.html_content))
}

/// GET /html/latest -> the report with the maximum stored date.
pub async fn latest_html(
    State(state): State<ReportState>,
) -> Result<Html<String>, ReportError> {
    let snapshot = state.storage.get_latest_snapshot().await?;
    debug!(date = %snapshot.date, "serving latest snapshot");
    Ok(Html(snapshot.html_content))
}
