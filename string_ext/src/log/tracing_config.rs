// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "r3bl_string_ext_log.txt";

/// Configure where logs go and which level is enabled. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Logging is disabled by default ([`LevelFilter::OFF`]).
///
/// ```
/// use r3bl_string_ext::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let it = TracingConfig::new_display(DisplayPreference::Stderr);
/// assert_eq!(it.level_filter, LevelFilter::DEBUG);
/// assert!(matches!(it.writer_config, WriterConfig::Display(DisplayPreference::Stderr)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The [String] is the path of the log file, eg: `/tmp/my_app.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Log `DEBUG` and above to both the given [`DisplayPreference`] and a file
    /// (defaults to [`DEFAULT_LOG_FILE_NAME`]).
    #[must_use]
    pub fn new_file_and_display(
        file_path: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert_eq2!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
    }

    #[test]
    fn test_new_file_default_name() {
        let it = TracingConfig::new_file(None);
        assert_eq2!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_new_file_and_display() {
        let it = TracingConfig::new_file_and_display(
            Some("a.log".to_string()),
            DisplayPreference::Stdout,
        );
        assert_eq2!(
            it.writer_config,
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".to_string())
        );
        assert_eq2!(it.level_filter, LevelFilter::DEBUG);
    }
}
