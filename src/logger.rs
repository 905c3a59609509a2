//! Logging for studyflow
//!
//! All diagnostics go through the `log` facade. [`init`] installs a `fern`
//! dispatch that always feeds the in-memory [`Logger`] (shown in the logs
//! dialog) and, when enabled in the config, appends to a log file.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Entries kept in memory before the oldest are dropped
pub const MAX_MEMORY_ENTRIES: usize = 1000;

/// Shared in-memory log buffer
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_MEMORY_ENTRIES {
                let overflow = logs.len() - MAX_MEMORY_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
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

/// Path of the log file inside the user data directory
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .map(|dir| dir.join("studyflow").join("studyflow.log"))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
}

/// Install the global logger.
///
/// Returns the log file path when file logging is enabled. Can only succeed
/// once per process.
pub fn init(config: &LoggingConfig, memory: Logger) -> Result<Option<PathBuf>> {
    let level = log::LevelFilter::from_str(&config.level)
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", config.level, e))?;

    let memory_output = fern::Output::call(move |record| {
        memory.log(format!("{} {}", record.level(), record.args()));
    });

    let mut dispatch = fern::Dispatch::new().level(level).chain(memory_output);

    let file_path = if config.enabled {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
        Some(path)
    } else {
        None
    };

    dispatch
        .apply()
        .map_err(|e| anyhow::anyhow!("Logger already initialized: {}", e))?;
    Ok(file_path)
}
