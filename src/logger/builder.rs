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

use std::path::PathBuf;

use jiff::tz::TimeZone;

use crate::Append;
use crate::Logger;
use crate::Trap;
use crate::append::DEFAULT_FILENAME;
use crate::append::LogFile;
use crate::append::Stderr;
use crate::logger::PersistFailure;
use crate::logger::log_impl::set_default_logger;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] with the default configuration.
///
/// # Examples
///
/// ```
/// use stamplog::append;
/// use stamplog::layout::TextLayout;
///
/// stamplog::builder()
///     .console(append::Stdout::default().with_layout(TextLayout::default().no_color()))
///     .filename("my_service.log")
///     .apply();
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        console: Box::new(Stderr::default()),
        directory: None,
        filename: DEFAULT_FILENAME.to_string(),
        timezone: None,
        persist_failure: PersistFailure::default(),
        trap: Box::new(DefaultTrap::default()),
    }
}

/// A builder for configuring a [`Logger`] and setting up the global logger.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
///
/// let logger = stamplog::builder().timezone(TimeZone::UTC).build();
/// logger.simple(false);
/// ```
#[must_use = "call `apply` to set the global logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    console: Box<dyn Append>,
    directory: Option<PathBuf>,
    filename: String,
    timezone: Option<TimeZone>,
    persist_failure: PersistFailure,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Set the appender that receives rendered records.
    ///
    /// Default to [`Stderr`].
    pub fn console(mut self, console: impl Into<Box<dyn Append>>) -> Self {
        self.console = console.into();
        self
    }

    /// Set the directory holding the log file.
    ///
    /// Default to the working directory at the time of each call.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the name of the log file.
    ///
    /// Default to [`DEFAULT_FILENAME`].
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Set what happens when a record cannot be persisted.
    ///
    /// Default to [`PersistFailure::Report`].
    pub fn persist_failure(mut self, policy: PersistFailure) -> Self {
        self.persist_failure = policy;
        self
    }

    /// Set the trap for internal errors.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        let LoggerBuilder {
            console,
            directory,
            filename,
            timezone,
            persist_failure,
            trap,
        } = self;

        let mut log_file = LogFile::new(filename);
        if let Some(directory) = directory {
            log_file = log_file.directory(directory);
        }

        Logger::new(
            console,
            log_file,
            timezone.unwrap_or_else(TimeZone::system),
            persist_failure,
            trap,
        )
    }

    /// Set up the global logger used by the free functions of this crate.
    ///
    /// This should be called early in the execution of a Rust program. Any log calls made
    /// before initialization install and use the default configuration instead.
    ///
    /// # Errors
    ///
    /// Return the logger back if a global logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// if stamplog::builder().try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), Logger> {
        set_default_logger(self.build())
    }

    /// Set up the global logger used by the free functions of this crate.
    ///
    /// # Panics
    ///
    /// Panic if the global logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// stamplog::builder().apply();
    /// ```
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the global logger initialized");
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_custom_filename_and_directory() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = builder()
            .directory(temp_dir.path())
            .filename("custom.log")
            .timezone(TimeZone::UTC)
            .build();

        let path = logger.start_log_file().unwrap();
        assert_eq!(path, temp_dir.path().join("custom.log"));
        assert_eq!(logger.find_log_file().unwrap(), path);
    }
}
