use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    util::{SubscriberInitExt, TryInitError},
};

/// File name used when logging to a directory.
pub const LOG_FILE_NAME: &str = "mazepath.log";

/// Install the global tracing subscriber.
///
/// Logs go to stderr, or to [`LOG_FILE_NAME`] inside `log_dir` through a non-blocking writer.
/// The level defaults to `info` and follows `RUST_LOG` when set. The returned guard flushes the
/// file writer on drop and must be kept alive for as long as logging is needed.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>, TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .finish()
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish()
                .try_init()?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_installs_once() {
        let dir = std::env::temp_dir().join(format!("mazepath-logs-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let guard = init(Some(dir.as_path())).unwrap();
        assert!(guard.is_some());
        tracing::info!("[test] logging initialized");
        assert!(init(None).is_err());
        drop(guard);
        assert!(dir.join(LOG_FILE_NAME).exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
