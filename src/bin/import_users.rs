// User Import Binary
//
// One-off bulk load of the fixed user list into the users tree.
// Usage: DATABASE_URL=https://... cargo run --bin import_users
//
// Each record is written independently; failures are logged and the run
// continues. No retry, no rollback. Exit status is nonzero if any record
// failed.

use anyhow::bail;
use plant_monitor::seed;
use plant_monitor::RealtimeDb;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plant_monitor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string());

    let mut db = RealtimeDb::new(&database_url);
    if let Ok(token) = std::env::var("DATABASE_AUTH") {
        db = db.with_auth(token);
    }

    let users = seed::sample_users();
    tracing::info!("Importing {} users into {}", users.len(), database_url);

    let summary = seed::import_users(&db, &users).await;

    if summary.all_succeeded() {
        tracing::info!("All users imported successfully!");
        Ok(())
    } else {
        bail!(
            "{} of {} users failed to import",
            summary.failed,
            users.len()
        )
    }
}
