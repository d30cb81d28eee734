use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use daily_report::ReportError;
use daily_report::db::{self, SnapshotStorage};

async fn temp_storage(tag: &str) -> (SnapshotStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "daily-report-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = db::spawn(&database_url)
        .await
        .expect("failed to open test storage");
    (storage, temp_path)
}

fn cleanup(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[tokio::test]
async fn unseen_date_is_not_found() {
    let (storage, path) = temp_storage("unseen-date").await;

    let err = storage
        .get_snapshot("2024-01-01")
        .await
        .expect_err("fresh store should hold no snapshots");
    assert!(matches!(err, ReportError::SnapshotNotFound(date) if date == "2024-01-01"));

    cleanup(&path);
}

#[tokio::test]
async fn upsert_overwrites_instead_of_duplicating() {
    let (storage, path) = temp_storage("upsert-overwrite").await;

    storage
        .upsert_snapshot("2024-01-01", "<p>first</p>")
        .await
        .expect("first upsert failed");
    let snapshot = storage.get_snapshot("2024-01-01").await.expect("read back");
    assert_eq!(snapshot.html_content, "<p>first</p>");

    storage
        .upsert_snapshot("2024-01-01", "<p>second</p>")
        .await
        .expect("second upsert failed");
    let snapshot = storage.get_snapshot("2024-01-01").await.expect("read back");
    assert_eq!(snapshot.html_content, "<p>second</p>");

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM html_data")
        .fetch_one(storage.pool())
        .await
        .expect("count failed");
    assert_eq!(rows, 1);

    cleanup(&path);
}

#[tokio::test]
async fn latest_picks_the_maximum_date() {
    let (storage, path) = temp_storage("latest-max").await;

    storage
        .upsert_snapshot("2024-01-01", "<p>old</p>")
        .await
        .expect("upsert failed");
    storage
        .upsert_snapshot("2024-01-07", "<p>new</p>")
        .await
        .expect("upsert failed");

    let latest = storage.get_latest_snapshot().await.expect("latest failed");
    assert_eq!(latest.date, "2024-01-07");
    assert_eq!(latest.html_content, "<p>new</p>");

    cleanup(&path);
}

#[tokio::test]
async fn latest_on_empty_store_is_not_found() {
    let (storage, path) = temp_storage("latest-empty").await;

    let err = storage
        .get_latest_snapshot()
        .await
        .expect_err("empty store should report no snapshots");
    assert!(matches!(err, ReportError::NoSnapshots));

    cleanup(&path);
}

#[tokio::test]
async fn delete_is_strictly_before_cutoff() {
    let (storage, path) = temp_storage("delete-cutoff").await;

    for date in ["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"] {
        storage
            .upsert_snapshot(date, "<p>seeded</p>")
            .await
            .expect("seed failed");
    }

    let purged = storage
        .delete_snapshots_older_than("2024-03-03")
        .await
        .expect("delete failed");
    assert_eq!(purged, 2);

    assert!(storage.get_snapshot("2024-03-03").await.is_ok());
    assert!(storage.get_snapshot("2024-03-04").await.is_ok());
    assert!(matches!(
        storage.get_snapshot("2024-03-01").await,
        Err(ReportError::SnapshotNotFound(_))
    ));

    cleanup(&path);
}

#[tokio::test]
async fn counter_counts_sequentially_from_one() {
    let (storage, path) = temp_storage("counter-seq").await;

    for expected in 1..=5_i64 {
        let value = storage
            .increment_and_get_counter()
            .await
            .expect("increment failed");
        assert_eq!(value, expected);
    }

    cleanup(&path);
}

#[tokio::test]
async fn concurrent_counter_calls_lose_no_updates() {
    let (storage, path) = temp_storage("counter-concurrent").await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage
                .increment_and_get_counter()
                .await
                .expect("increment failed")
        }));
    }

    let mut seen = Vec::new();
    for handle in handles {
        seen.push(handle.await.expect("task panicked"));
    }
    seen.sort_unstable();

    let expected: Vec<i64> = (1..=20).collect();
    assert_eq!(seen, expected);

    cleanup(&path);
}

#[tokio::test]
async fn schema_init_is_idempotent_and_keeps_counter_value() {
    let (storage, path) = temp_storage("schema-idempotent").await;

    storage
        .increment_and_get_counter()
        .await
        .expect("increment failed");
    storage.init_schema().await.expect("re-init failed");

    let value = storage
        .increment_and_get_counter()
        .await
        .expect("increment failed");
    assert_eq!(value, 2);

    cleanup(&path);
}
