use std::sync::Arc;

use axum::{Router, routing::get};

use crate::db::SnapshotStorage;
use crate::handlers::{diagnostics, reports};
use crate::service::diagnostics::DiagnosticsProbe;

#[derive(Clone)]
pub struct ReportState {
    pub storage: SnapshotStorage,
    pub probe: Arc<dyn DiagnosticsProbe>,
}

impl ReportState {
    pub fn new(storage: SnapshotStorage, probe: Arc<dyn DiagnosticsProbe>) -> Self {
        Self { storage, probe }
    }
}

/// Build the service router. `/html/latest` is a static route, so axum
/// matches it ahead of the `{date}` capture.
pub fn report_router(state: ReportState) -> Router {
    Router::new()
        .route("/html/latest", get(reports::latest_html))
        .route("/html/{date}", get(reports::html_by_date))
        .route("/counter", get(diagnostics::counter))
        .route("/test", get(diagnostics::probe))
        .with_state(state)
}
