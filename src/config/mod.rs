//! Configuration module for the Gourmet core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::catalog::MenuSource;
use crate::errors::AppError;
use crate::validation::TimeWindow;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file backing local storage
    pub db_path: PathBuf,
    /// Menu JSON location: a file path or an http(s) URL
    pub menu_source: MenuSource,
    /// Reservation hours
    pub opening_hours: TimeWindow,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("GOURMET_DB_PATH")
            .unwrap_or_else(|_| "./data/gourmet.sqlite".to_string())
            .into();

        let menu_source = MenuSource::parse(
            &env::var("GOURMET_MENU_SOURCE").unwrap_or_else(|_| "./data/menu.json".to_string()),
        );

        let open = env::var("GOURMET_OPEN_TIME").unwrap_or_else(|_| "10:00".to_string());
        let close = env::var("GOURMET_CLOSE_TIME").unwrap_or_else(|_| "23:00".to_string());
        let opening_hours = TimeWindow::from_hhmm(&open, &close).ok_or_else(|| {
            AppError::Config(format!(
                "Invalid opening hours {}-{} (GOURMET_OPEN_TIME / GOURMET_CLOSE_TIME)",
                open, close
            ))
        })?;

        let log_level = env::var("GOURMET_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let format = env::var("GOURMET_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
        let log_format = LogFormat::from_str(&format).ok_or_else(|| {
            AppError::Config(format!("Invalid GOURMET_LOG_FORMAT: {}", format))
        })?;

        Ok(Self {
            db_path,
            menu_source,
            opening_hours,
            log_level,
            log_format,
        })
    }
}
