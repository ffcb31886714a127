//! Match logger writing to the console and the SD card.
//!
//! Implements the [`log`] crate's facade. Every record goes to the
//! console (visible over the terminal during development); records also
//! append to `match.log` on the SD card when one is inserted. Warnings
//! and errors flush the file immediately so a crash mid-autonomous
//! still leaves its last complaint on disk.
//!
//! Each entry carries the uptime since program start:
//!
//! ```text
//! [1m 32s 450ms] INFO aurum::auton::seek: Cube sighted at 94px
//! [1m 33s 12ms] WARN aurum::drivetrain::tank: Tank Move Timed Out After 3000ms
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Log file path on the SD card.
const LOG_PATH: &str = "match.log";

/// The match logger.
///
/// The file writer is `None` when no SD card is present; console output
/// still works in that case.
pub struct MatchLogger {
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl MatchLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_PATH)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] {} {}: {}\n",
            format_duration(uptime()),
            record.level(),
            record.target(),
            record.args()
        );

        print!("{}", line);

        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.write_all(line.as_bytes());
                if record.level() <= Level::Warn {
                    let _ = writer.flush();
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<MatchLogger> = OnceLock::new();

/// Initializes the match logger.
///
/// Call once at program start, before any logging macros run.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(MatchLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Uptime since the user program started.
///
/// Off-target (host test runs) there is no VexOS clock, so a fixed
/// placeholder stands in.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(92450)
    }
}

#[cfg(test)]
mod tests {
    use log::{debug, error, info, trace, warn, LevelFilter};

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        trace!("This is a trace message");
        debug!("This is a debug message");
        info!("This is an info message");
        warn!("This is a warning message");
        error!("This is an error message");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
