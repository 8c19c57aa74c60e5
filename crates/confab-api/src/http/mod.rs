//! HTTP server: router, handlers, error mapping.

pub mod error;
pub mod handlers;
pub mod router;

use anyhow::Context;

use crate::state::AppState;
use confab_infra::sqlite::archive::SqliteArchive;
use confab_infra::sqlite::pool::DatabasePool;

/// Start the HTTP API server.
///
/// Loads settings, reads the credential from the environment (fatal if
/// absent), opens the SQLite archive under the data directory, and
/// serves until the process is stopped.
pub async fn serve(bind_override: Option<String>) -> anyhow::Result<()> {
    let data_dir = confab_infra::settings::resolve_data_dir();
    tokio::fs::create_dir_all(&data_dir)
        .await
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

    let settings = confab_infra::settings::load_settings(&data_dir).await;
    let api_key = confab_infra::credential::api_key_from_env()?;

    let db_url = confab_infra::settings::default_database_url(&data_dir);
    let pool = DatabasePool::new(&db_url)
        .await
        .with_context(|| format!("failed to open database at {db_url}"))?;
    let archive = SqliteArchive::new(pool);

    let state = AppState::new(&settings, api_key, Some(archive));
    let app = router::build_router(state);

    let bind = bind_override.unwrap_or_else(|| settings.server.bind.clone());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!(%bind, "confab API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
