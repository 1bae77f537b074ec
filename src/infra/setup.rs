use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::infra::config::AppConfig;

fn file_writer(log_path: &str, prefix: &str) -> (NonBlocking, WorkerGuard) {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("jsonl")
        .build(log_path)
        .expect("failed to create file appender");
    NonBlockingBuilder::default().lossy(false).finish(appender)
}

/// Console layer plus two daily-rolling JSON files: one for errors, one for
/// the info/warn stream. The returned guards flush on drop and have to stay
/// alive for the lifetime of the process.
pub fn init_tracing(config: &AppConfig) -> (WorkerGuard, WorkerGuard) {
    let log_path = &config.logger.log_path;
    let (error_writer, error_guard) = file_writer(log_path, "err_logs");
    let (app_writer, app_guard) = file_writer(log_path, "app_logs");

    let error_layer = fmt::layer()
        .json()
        .with_writer(error_writer)
        .with_filter(filter_fn(|metadata| {
            metadata.level() == &tracing::Level::ERROR
        }));
    let app_layer = fmt::layer()
        .json()
        .with_writer(app_writer)
        .with_filter(filter_fn(|metadata| {
            let level = metadata.level();
            level == &tracing::Level::INFO || level == &tracing::Level::WARN
        }));
    let console_layer = fmt::layer().with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );

    tracing_subscriber::registry()
        .with(error_layer)
        .with(app_layer)
        .with(console_layer)
        .init();

    (error_guard, app_guard)
}
