use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

/// Install the global JSON subscriber.
///
/// With `log_file` set, events are appended to that file instead of stdout.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    AppError::config(format!("cannot open log file {}: {e}", path.display()))
                })?;
            Some(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stdout_layer = log_file.is_none().then(|| {
        fmt::layer()
            .json()
            .with_target(false)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::config(format!("tracing already initialised: {e}")))
}
