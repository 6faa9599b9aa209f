#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Metadata, Record};

/// Env var holding the log level for this crate's own targets.
pub const LOG_ENV: &str = "UNSCRAMBLE_LOG";

/// Writes to stderr so stdout stays free for the board and JSON reports.
/// Records from other crates are only shown at `warn` and above.
struct StderrLogger {
    own: LevelFilter,
}

impl StderrLogger {
    fn threshold(&self, target: &str) -> LevelFilter {
        if target.starts_with(env!("CARGO_CRATE_NAME")) {
            self.own
        } else {
            self.own.min(LevelFilter::Warn)
        }
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.threshold(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name such as `debug` or `WARN`; `None` for anything else.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Initialize logging with the level from `UNSCRAMBLE_LOG`, falling back to
/// `info`.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| parse_level(&lvl))
        .unwrap_or(LevelFilter::Info);
    init_logging_with(level);
}

/// Initialize logging at a fixed level. Only the first call installs the
/// logger.
pub fn init_logging_with(level: LevelFilter) {
    let logger = Box::new(StderrLogger { own: level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
