use std::error::Error;
use std::fmt::{Display, Formatter};

use slog::{Drain, Level};
use slog_scope::GlobalLoggerGuard;
use slog_term::ThreadSafeTimestampFn;

/// Environment variable holding the log level, e.g. `GRID_LOG=trace`
pub const LOG_LEVEL_VAR: &str = "GRID_LOG";

pub struct LoggerBuilder {
    level: Level,
}

/// Keeps the global logger installed until dropped
pub struct Logger(Level, GlobalLoggerGuard);

#[derive(Debug, PartialEq, Eq)]
pub enum LogError {
    BadLevel(String),
}

impl LoggerBuilder {
    pub fn with_env() -> Result<Self, LogError> {
        Self::with_level_str(std::env::var(LOG_LEVEL_VAR).ok().as_deref())
    }

    fn with_level_str(level: Option<&str>) -> Result<Self, LogError> {
        let mut builder = Self::default();

        if let Some(level) = level {
            let parsed = level
                .parse()
                .map_err(|_| LogError::BadLevel(level.to_owned()))?;
            builder = builder.level(parsed)
        }

        Ok(builder)
    }

    pub fn level(mut self, s: Level) -> Self {
        self.level = s;
        self
    }

    pub fn init(self, timestamp_fn: impl ThreadSafeTimestampFn) -> Result<Logger, LogError> {
        let decorator = slog_term::TermDecorator::new().stderr().build();
        let drain = slog_term::CompactFormat::new(decorator)
            .use_custom_timestamp(timestamp_fn)
            .build()
            .fuse();
        let drain = drain.filter_level(self.level).fuse();
        let drain = slog_async::Async::new(drain)
            .thread_name("logging".to_owned())
            .chan_size(1024)
            .build_no_guard()
            .fuse();
        let logger = slog::Logger::root(drain, slog::o!());

        let global = slog_scope::set_global_logger(logger);
        Ok(Logger(self.level, global))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

impl Logger {
    pub fn level(&self) -> Level {
        self.0
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::BadLevel(s) => write!(f, "Invalid level {:?}", s),
        }
    }
}

impl Error for LogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_str() {
        let builder = LoggerBuilder::with_level_str(Some("trace")).expect("valid level");
        assert_eq!(builder.level, Level::Trace);

        let builder = LoggerBuilder::with_level_str(None).expect("no level");
        assert_eq!(builder.level, Level::Info);
    }

    #[test]
    fn bad_level() {
        let err = LoggerBuilder::with_level_str(Some("loud")).err();
        assert_eq!(err, Some(LogError::BadLevel("loud".to_owned())));
    }
}
