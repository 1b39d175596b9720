#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// One log line: `LEVEL [target] message`.
pub fn format_record(record: &Record) -> String {
    format!("{} [{}] {}", record.level(), record.target(), record.args())
}

/// Initialize logging with a level taken from the `TICTACTOE_LOG` environment
/// variable. Defaults to `info` if the variable is not set or invalid.
///
/// Stdout carries the rendered board and the JSON that `replay --json` and
/// `sim` print for other programs to parse, so log lines go to stderr.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
