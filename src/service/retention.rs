use crate::db::SnapshotStorage;
use crate::error::ReportError;
use crate::service::report::generate_report;
use chrono::{DateTime, Duration, Utc};
use tracing::{error, info};

/// Trailing calendar days of snapshots kept after each pass.
pub const RETENTION_DAYS: i64 = 7;

const PASS_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60 * 60 * 24);

/// Write today's snapshot and purge everything outside the retention window.
/// Safe to re-run within a day: the upsert refreshes today's row in place.
pub async fn run_once(storage: &SnapshotStorage, now: DateTime<Utc>) -> Result<(), ReportError> {
    let today = now.format("%Y-%m-%d").to_string();
    let html = generate_report(now);
    storage.upsert_snapshot(&today, &html).await?;

    // The day exactly RETENTION_DAYS back ages out: the window is today
    // plus the six days before it.
    let cutoff = (now - Duration::days(RETENTION_DAYS - 1))
        .format("%Y-%m-%d")
        .to_string();
    let purged = storage.delete_snapshots_older_than(&cutoff).await?;

    info!(date = %today, cutoff = %cutoff, purged, "retention pass complete");
    Ok(())
}

/// Drive the retention pass on a fixed 24h cadence for the process lifetime.
/// The interval's immediate first tick is consumed up front; the caller is
/// expected to have run the startup pass synchronously already.
pub fn spawn(storage: SnapshotStorage) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PASS_INTERVAL);
        interval.tick().await;
        loop {
            interval.tick().await;
            if let Err(e) = run_once(&storage, Utc::now()).await {
                error!(error = %e, "scheduled retention pass failed");
            }
        }
    })
}
