use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace, warn};

use crate::config::db::{DbKind, DbSettings};
use crate::error::AppError;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_CONNECT_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays
/// Returns the result of the last attempt after all retries are exhausted
pub(crate) async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts.max(1) {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection_retry=failed");
                last_error = Some(e);
                if attempt < max_attempts {
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::config("connection retry failed without an error")))
}

/// Per-connection statements run by the SQLite `after_connect` hook.
fn sqlite_session_statements(settings: &DbSettings) -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {};", settings.busy_timeout_ms),
    ]
}

/// Open a pooled connection for `settings`. Runs no migrations.
pub async fn build_pool(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    match settings.kind {
        DbKind::SqliteFile | DbKind::SqliteMemory => build_sqlite_pool(settings).await,
        DbKind::Postgres => build_postgres_pool(settings).await,
    }
}

async fn build_sqlite_pool(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(&settings.url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let statements = sqlite_session_statements(settings);
    let mut pool_opts = SqlitePoolOptions::new()
        .max_connections(settings.pool_max)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                for stmt in &statements {
                    sqlx::query(stmt).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        });

    // Every in-memory connection is its own database: keep exactly one alive.
    if settings.kind == DbKind::SqliteMemory {
        pool_opts = pool_opts
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_opts
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    if settings.kind == DbKind::SqliteFile {
        sqlx::query("PRAGMA journal_mode = WAL;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::config(format!("failed to enable WAL journal: {e}")))?;
    }

    info!(
        engine = "sqlite",
        kind = %settings.kind,
        max = settings.pool_max,
        acquire_timeout_ms = settings.acquire_timeout_ms,
        busy_timeout_ms = settings.busy_timeout_ms,
        "pool=create"
    );

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn build_postgres_pool(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    info!(
        engine = "postgres",
        max = settings.pool_max,
        acquire_timeout_ms = settings.acquire_timeout_ms,
        "pool=connecting"
    );

    let pool = retry_connection(
        || {
            let url = settings.url.clone();
            let max = settings.pool_max;
            let acquire_timeout = Duration::from_millis(settings.acquire_timeout_ms);
            async move {
                PgPoolOptions::new()
                    .max_connections(max)
                    .acquire_timeout(acquire_timeout)
                    .idle_timeout(Duration::from_secs(30))
                    .connect(&url)
                    .await
                    .map_err(|e| AppError::config(format!("failed to connect to Postgres: {e}")))
            }
        },
        PG_CONNECT_ATTEMPTS,
        PG_CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(engine = "postgres", max = settings.pool_max, "pool=create");
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

/// Build the pool *and* bring the schema up to date.
///
/// Migrations run on the pool that is returned; for in-memory SQLite that
/// is the only place the schema can live.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    info!(kind = %settings.kind, pid = std::process::id(), "bootstrap=start");

    let db = build_pool(settings).await?;
    migrate(&db, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!(kind = %settings.kind, "bootstrap=ready");
    Ok(db)
}
