use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// File the log is written to, inside the data directory
pub const LOG_FILE_NAME: &str = "jotlist.log";

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "JOTLIST_LOG";

/// Initialize logging into the data directory. The terminal belongs to the UI,
/// so nothing is written to stdout or stderr. Keep the returned guard alive
/// until exit so buffered lines get flushed.
pub fn init_logging(data_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false),
    );

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Logging initialized at {:?}", data_dir.join(LOG_FILE_NAME));

    Ok(guard)
}
