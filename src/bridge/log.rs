// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use crate::Logger;
use crate::default_logger;
use crate::record::Location;
use crate::severity::Severity;

// log has no fatal or panic level, so bridged records never end the process
fn severity_of(level: log::Level) -> Option<Severity> {
    match level {
        log::Level::Error => Some(Severity::Error),
        log::Level::Warn => Some(Severity::Warning),
        log::Level::Info => Some(Severity::Info),
        log::Level::Debug | log::Level::Trace => None,
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let file = match record.file_static() {
            Some(file) => Cow::Borrowed(file),
            None => Cow::Owned(record.file().unwrap_or_default().to_string()),
        };

        let mut builder = self
            .record(Location::caller())
            .file(file)
            .line(record.line().unwrap_or_default())
            .message(&record.args().to_string());

        let severity = severity_of(record.level());
        if let Some(name) = severity.and_then(Severity::name) {
            builder = builder.status(name);
        }

        Logger::log(self, &builder.severity(severity).build(), false);
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record)
    }

    fn flush(&self) {
        log::Log::flush(default_logger())
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that all logs from the log crate are forwarded
/// to stamplog's default logger. `error!`, `warn!` and `info!` records carry the status
/// `error`, `warning` and `info`; `debug!` and `trace!` records carry only a message.
///
/// Bridged records are printed, never persisted.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = stamplog::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for details.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// stamplog::bridge::setup_log_crate();
/// log::info!("service is up");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "stamplog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
