use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener and process-level settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When set, logs are appended here instead of stdout
    pub log_file: Option<PathBuf>,
    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("PORT must be a number between 0 and 65535, got '{raw}'"))
            })?,
            _ => DEFAULT_PORT,
        };

        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            log_file,
            cors_allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .map(str::to_string)
        .collect()
}
