// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::{IntoDiagnostic, WrapErr};
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs a global subscriber for the given [`TracingConfig`]. Does nothing for
/// [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed, by this function
/// or by anything else in the process.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    let Some(layer) = create_display_layer::<Registry>(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    ) else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Could not set the global tracing subscriber")
}

/// Installs a subscriber for the current thread only, until the returned guard is
/// dropped. Returns [`None`] for [`WriterConfig::None`].
#[must_use]
pub fn initialize_logging_thread_local(tracing_config: TracingConfig) -> Option<DefaultGuard> {
    let layer = create_display_layer::<Registry>(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )?;
    Some(tracing_subscriber::registry().with(layer).set_default())
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_names(false);

    match writer_config {
        WriterConfig::None => None,
        WriterConfig::Display(DisplayPreference::Stdout) => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        )),
        WriterConfig::Display(DisplayPreference::Stderr) => Some(Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, gradient, rgb_color};
    use serial_test::serial;

    #[test]
    fn test_create_display_layer() {
        assert!(create_display_layer::<Registry>(LevelFilter::DEBUG, WriterConfig::None).is_none());
        assert!(
            create_display_layer::<Registry>(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stderr)
            )
            .is_some()
        );
    }

    #[test]
    fn test_thread_local_logging() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::TRACE,
        };
        assert!(initialize_logging_thread_local(config).is_none());

        let config = TracingConfig::default().with_level(tracing::Level::TRACE);
        let guard = initialize_logging_thread_local(config);
        assert!(guard.is_some());

        // Events are emitted while the guard is alive.
        let result = gradient(rgb_color!(0, 0, 0), rgb_color!(9, 9, 9), 2);
        assert_eq2!(result.len(), 4);
        drop(guard);
    }

    #[serial]
    #[test]
    fn test_global_logging_installs_once() {
        let config = TracingConfig::default().with_level(tracing::Level::WARN);
        assert!(try_initialize_logging_global(config).is_ok());
        assert!(try_initialize_logging_global(config).is_err());

        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::WARN,
        };
        assert!(try_initialize_logging_global(config).is_ok());
    }
}
