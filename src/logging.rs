//! Console logger setup.
//!
//! All diagnostics go to stdout as plain `Label: message` lines.

use std::io::Write;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Fixed verbosity; not configurable from the environment.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Prefix printed in front of each message.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "Error",
        Level::Warn => "Warning",
        Level::Info => "Info",
        Level::Debug => "Debug",
        Level::Trace => "Trace",
    }
}

/// Logger builder writing `Label: message` lines to stdout at [`LOG_LEVEL`].
pub fn logger_builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LOG_LEVEL)
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(buf, "{}: {}", level_label(record.level()), record.args())
        });
    builder
}

/// Installs the global logger. Safe to call more than once.
pub fn init_logging() {
    let _ = logger_builder().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(Level::Warn), "Warning");
        assert_eq!(level_label(Level::Info), "Info");
        assert_eq!(level_label(Level::Error), "Error");
    }

    #[test]
    fn test_filter_fixed_at_info() {
        std::env::set_var("RUST_LOG", "off");
        let logger = logger_builder().build();
        std::env::remove_var("RUST_LOG");
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
        log::info!("logger initialised");
    }
}
