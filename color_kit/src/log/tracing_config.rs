// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure where the [`tracing`] events emitted by this crate are displayed, and at
/// which level.
///
/// Use [`crate::try_initialize_logging_global()`] or
/// [`crate::initialize_logging_thread_local()`] to install it.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level`: [`tracing::Level`] - The log level to use for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self { Self::new_display(DisplayPreference::default()) }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(self, level: tracing::Level) -> Self { Self { level, ..self } }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq2!(config.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_with_level() {
        let config =
            TracingConfig::new_display(DisplayPreference::Stdout).with_level(tracing::Level::WARN);
        assert_eq2!(config.get_level_filter(), LevelFilter::WARN);
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stdout)
        );
    }
}
