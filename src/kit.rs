/// EditorKit - global logger management for the editor helpers
///
/// The helpers themselves are stateless; the only shared state in the crate
/// is the logger they report through. This module owns that singleton,
/// using thread-safe static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Global access point for the editor kit's logging
///
/// All `editor_*!` macros route through here. By default messages go to the
/// console via [`DefaultLogger`]; the host editor may install its own logger
/// (e.g. an in-editor console panel) with [`EditorKit::set_logger`].
pub struct EditorKit;

impl EditorKit {
    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nebula_editor_kit::nebula::EditorKit;
    /// use nebula_editor_kit::nebula::log::{Logger, LogEntry};
    ///
    /// struct PanelLogger;
    ///
    /// impl Logger for PanelLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Append to the editor's console panel...
    ///     }
    /// }
    ///
    /// EditorKit::set_logger(PanelLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like editor_info!, editor_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "nebula::Surface")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by editor_error! macro to include source location.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level (typically Error)
    /// * `source` - Source module (e.g., "nebula::Surface")
    /// * `message` - Log message
    /// * `file` - Source file path
    /// * `line` - Source line number
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "kit_tests.rs"]
mod tests;
