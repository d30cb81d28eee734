use chrono::{DateTime, Utc};

/// Render the daily report body for the given instant.
/// Deterministic: the same `now` always yields the same document.
pub fn generate_report(now: DateTime<Utc>) -> String {
    let stamp = now.format("%Y-%m-%d %H:%M:%S");
    format!(
        "<html><body><h1>Report for {stamp}</h1><p>Generated automatically.</p></body></html>"
    )
}
