//! Application logger.
//!
//! Every line is kept in an in-memory buffer for the logs dialog. When file
//! logging is enabled the same lines are forwarded to the `log` facade and a
//! `fern` dispatcher appends them to `<data dir>/vitae/vitae.log`.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Upper bound on buffered lines; the oldest are dropped first
const MAX_BUFFERED_LINES: usize = 1_000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            log_file: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting.
    ///
    /// With logging enabled this installs the global `fern` dispatcher. A
    /// dispatcher installed earlier in the process is kept as is.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let installed = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(file)
            .apply();

        if installed.is_err() {
            log::debug!("Logger: dispatcher already installed, reusing it");
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
            log_file: Some(path),
        })
    }

    /// Path of the log file: `<data dir>/vitae/vitae.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("vitae").join("vitae.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!("{}", message);
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_BUFFERED_LINES {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
