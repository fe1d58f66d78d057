use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Storage engine backing the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// SQLite database file on disk
    SqliteFile,
    /// Private in-memory SQLite database (lost on shutdown)
    SqliteMemory,
    /// PostgreSQL server reached through `DATABASE_URL`
    Postgres,
}

impl DbKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
            DbKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            other => Err(AppError::config(format!(
                "DB_KIND must be one of sqlite-file, sqlite-memory, postgres; got '{other}'"
            ))),
        }
    }
}

const DEFAULT_SQLITE_PATH: &str = "./canastra.db";
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_PG_POOL_MAX: u32 = 5;

/// Connection settings for the entity store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub kind: DbKind,
    /// Connection string handed to sqlx
    pub url: String,
    pub pool_max: u32,
    pub acquire_timeout_ms: u64,
    /// SQLite `busy_timeout` PRAGMA; ignored for Postgres
    pub busy_timeout_ms: u64,
}

impl DbSettings {
    /// Read settings from `DB_KIND`, `SQLITE_PATH`, `DATABASE_URL`,
    /// `DB_POOL_MAX`, `DB_ACQUIRE_TIMEOUT_MS` and `SQLITE_BUSY_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        let kind = match env::var("DB_KIND") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => DbKind::SqliteFile,
        };

        let mut settings = Self::for_kind(kind)?;

        if let Some(pool_max) = parse_var::<u32>("DB_POOL_MAX")? {
            if pool_max == 0 {
                return Err(AppError::config("DB_POOL_MAX must be at least 1"));
            }
            settings.pool_max = pool_max;
        }
        if let Some(ms) = parse_var::<u64>("DB_ACQUIRE_TIMEOUT_MS")? {
            settings.acquire_timeout_ms = ms;
        }
        if let Some(ms) = parse_var::<u64>("SQLITE_BUSY_TIMEOUT_MS")? {
            settings.busy_timeout_ms = ms;
        }

        Ok(settings)
    }

    /// Defaults for `kind`, resolving its connection string from the environment.
    ///
    /// SQLite allows a single writer, so its pools default to one connection.
    pub fn for_kind(kind: DbKind) -> Result<Self, AppError> {
        let (url, pool_max) = match kind {
            DbKind::SqliteFile => {
                let path = env::var("SQLITE_PATH")
                    .ok()
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string());
                (format!("sqlite://{path}?mode=rwc"), 1)
            }
            DbKind::SqliteMemory => ("sqlite::memory:".to_string(), 1),
            DbKind::Postgres => (must_var("DATABASE_URL")?, DEFAULT_PG_POOL_MAX),
        };

        Ok(Self {
            kind,
            url,
            pool_max,
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        })
    }

    /// Private in-memory SQLite; needs no environment.
    pub fn sqlite_memory() -> Self {
        Self {
            kind: DbKind::SqliteMemory,
            url: "sqlite::memory:".to_string(),
            pool_max: 1,
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// SQLite file at `path`; used by tests that need a store surviving a pool.
    pub fn sqlite_file(path: impl AsRef<std::path::Path>) -> Self {
        Self {
            kind: DbKind::SqliteFile,
            url: format!("sqlite://{}?mode=rwc", path.as_ref().display()),
            pool_max: 1,
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

/// Parse an optional variable; empty counts as unset, garbage is an error.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| {
                AppError::config(format!(
                    "{name} must be a non-negative integer, got '{raw}'"
                ))
            }),
        _ => Ok(None),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!(
                "Required environment variable '{name}' is not set"
            ))
        })
}
