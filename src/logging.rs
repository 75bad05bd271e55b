//! tracing subscriber setup: stderr always, plus a daily rolling file when `LOG_DIR` is set.

use std::{env, io, path::PathBuf, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Rolling log file settings.
#[derive(Debug, PartialEq, Eq)]
struct FileSink {
    dir: PathBuf,
    max_files: Option<usize>,
}

impl FileSink {
    const PREFIX: &'static str = "talon.log";

    fn from_vars(dir: Option<String>, max_files: Option<String>) -> Option<Self> {
        let dir = dir.filter(|d| !d.trim().is_empty())?;

        Some(Self {
            dir: dir.into(),
            max_files: max_files.and_then(|v| v.parse().ok()).filter(|n| *n > 0),
        })
    }

    fn from_env() -> Option<Self> {
        Self::from_vars(env::var("LOG_DIR").ok(), env::var("LOG_MAX_FILES").ok())
    }

    fn open(&self) -> Result<NonBlocking, InitError> {
        let mut builder = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(Self::PREFIX);
        if let Some(n) = self.max_files {
            builder = builder.max_log_files(n);
        }

        let (writer, guard) = non_blocking(builder.build(&self.dir)?);
        let _ = LOG_GUARD.set(guard);

        Ok(writer)
    }
}

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false);

    let file = FileSink::from_env().map(|sink| (sink.open(), sink));
    match file {
        Some((Ok(writer), _)) => subscriber.with_writer(io::stderr.and(writer)).init(),
        Some((Err(e), sink)) => {
            subscriber.with_writer(io::stderr).init();
            tracing::warn!("cannot log to {}: {}", sink.dir.display(), e);
        }
        None => subscriber.with_writer(io::stderr).init(),
    }
}
