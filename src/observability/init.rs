//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by `RUST_LOG`, else `config.trace_level`, else `info`
/// 2. Formats them as plain text lines with span context
/// 3. Writes to `config.log_file` through a rotating [`FileWriter`]
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use pokecatalog::observability::init_tracing;
/// use pokecatalog::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: std::env::temp_dir().join("pokecatalog-doc.log"),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    if let Some(parent) = config.log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(config.log_file.clone()));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer));

    let _ = subscriber.try_init();
}
