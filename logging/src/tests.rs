use std::sync::Mutex;

use once_cell::sync::OnceCell;
use slog::Drain;
use slog_scope::GlobalLoggerGuard;

static LOGGER: OnceCell<GlobalLoggerGuard> = OnceCell::new();

/// Installs a stdout logger at trace level, once per process
#[allow(dead_code)]
pub fn for_tests() {
    LOGGER.get_or_init(|| {
        let drain = slog_term::TermDecorator::new().stdout().build();
        let drain = slog_term::CompactFormat::new(drain).build();
        let drain = Mutex::new(drain).fuse();
        let logger = slog::Logger::root(drain, slog::o!());
        slog_scope::set_global_logger(logger)
    });
}
