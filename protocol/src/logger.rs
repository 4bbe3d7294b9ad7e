use std::{sync::OnceLock, time::SystemTime};

use colored::Colorize;
use time::{OffsetDateTime, format_description::BorrowedFormatItem};

pub use log;
pub use log::{Level as LogLevel, LevelFilter as LogLevelFilter};

/// Console logger for applications built on this crate.
/// Records from the configured crate pass through at any level, everything else only at warn and above.
pub struct Logger {
    format_desc: Vec<BorrowedFormatItem<'static>>,
    self_crate_name: &'static str,
}

const TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]";

impl Logger {
    pub fn instance(self_crate_name: &'static str) -> &'static Self {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(|| Self {
            format_desc: time::format_description::parse(TIME_FORMAT).unwrap_or_default(),
            self_crate_name,
        })
    }

    /// install the logger for `self_crate_name` as the global logger and set the maximum level
    pub fn install(self_crate_name: &'static str, level: LogLevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_logger(Self::instance(self_crate_name))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        if metadata.target().starts_with(self.self_crate_name) {
            true
        } else {
            metadata.level() <= LogLevel::Warn
        }
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now: OffsetDateTime = SystemTime::now().into();
        let formatted_time = now.format(&self.format_desc).unwrap_or_default();

        let (level, args) = match record.level() {
            LogLevel::Error => (record.level().to_string().bright_red(), record.args().to_string().bright_red()),
            LogLevel::Warn => (record.level().to_string().bright_yellow(), record.args().to_string().bright_yellow()),
            LogLevel::Info => (record.level().to_string().cyan(), record.args().to_string().cyan()),
            LogLevel::Debug => (record.level().to_string().white(), record.args().to_string().white()),
            LogLevel::Trace => (record.level().to_string().normal(), record.args().to_string().normal()),
        };

        if record.level() == LogLevel::Error {
            eprintln!("[{formatted_time}] [{level}] - {args}");
        } else {
            println!("[{formatted_time}] [{level}] - {args}");
        }
    }

    fn flush(&self) {}
}
