// src/log.rs
// Append-only file logger. Inert until a front end calls `init`, so library
// callers (and tests) never touch the filesystem through it.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

static SINK: OnceLock<Mutex<PathBuf>> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Enable logging to `path`, creating parent directories as needed.
/// The first successful call wins; later calls keep the original file.
pub fn init<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    EPOCH.get_or_init(Instant::now);
    let _ = SINK.set(Mutex::new(path.to_path_buf()));
    Ok(())
}

pub fn is_enabled() -> bool {
    SINK.get().is_some()
}

/// `hh:mm:ss.mmm` since `init`.
fn stamp(since: Duration) -> String {
    let ms = since.as_millis() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

fn format_line(since: Duration, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("[{}][{}] {}\n", stamp(since), level.tag(), args)
}

/// Backend of the `logf!`/`logd!`/`loge!` macros.
pub fn write_log(level: Level, args: fmt::Arguments<'_>) {
    let Some(sink) = SINK.get() else { return };
    let since = EPOCH.get().map(Instant::elapsed).unwrap_or_default();
    let line = format_line(since, level, args);

    // Hold the lock across open+write so lines never interleave.
    let Ok(path) = sink.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&*path) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, format_args!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, format_args!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_is_zero_padded() {
        assert_eq!(stamp(Duration::ZERO), "00:00:00.000");
        assert_eq!(stamp(Duration::from_millis(3_723_004)), "01:02:03.004");
    }

    #[test]
    fn line_layout() {
        let line = format_line(Duration::from_millis(1_500), Level::Error, format_args!("row {}", 3));
        assert_eq!(line, "[00:00:01.500][ERROR] row 3\n");
    }
}
