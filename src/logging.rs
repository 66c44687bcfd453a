use std::io;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a stdout subscriber for demo and test consumers.
///
/// The library itself only emits events; callers that already run their own
/// `tracing` setup should skip this and keep their configuration.
pub fn configure_logging() {
    let stdout_log = fmt::layer().with_writer(io::stdout).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,pin_layout=debug,vote_tally=debug,feed_adapter=debug")
        }),
    );

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .init();
}
