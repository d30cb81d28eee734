use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use daily_report::router::{ReportState, report_router};
use daily_report::service::diagnostics::BuildInfoProbe;
use daily_report::service::retention;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &daily_report::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        port = cfg.port,
        loglevel = %cfg.loglevel
    );

    let storage = daily_report::db::spawn(&cfg.database_url).await?;

    // One pass up front, then the 24h timer takes over.
    retention::run_once(&storage, chrono::Utc::now()).await?;
    let _retention = retention::spawn(storage.clone());

    // Build axum router and serve
    let state = ReportState::new(storage, Arc::new(BuildInfoProbe));
    let app = report_router(state);

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
