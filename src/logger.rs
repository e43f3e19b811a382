use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::constants::{LOGS_DIR, LOG_FILE_NAME};

/// Console at INFO, rolling file at DEBUG. Keep the guard alive until exit.
pub fn init_default_logger() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(LOGS_DIR, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_filter(LevelFilter::INFO),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG),
        )
        .init();

    guard
}
