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

use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use jiff::tz::TimeZone;

use crate::Append;
use crate::Error;
use crate::Trap;
use crate::append::LogFile;
use crate::layout::TextLayout;
use crate::logger::builder::builder;
use crate::record::Location;
use crate::record::Record;
use crate::record::RecordBuilder;
use crate::severity::Action;
use crate::severity::Severity;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the default global logger instance.
///
/// If no logger has been installed with [`set_default_logger`] or
/// [`LoggerBuilder::apply`](crate::LoggerBuilder::apply), a logger with the default
/// configuration is installed and returned.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| builder().build())
}

/// Set the default global logger instance.
///
/// Return the logger back if a default logger has already been set.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// What the logger does when a record cannot be persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistFailure {
    /// Hand the error to the trap and keep logging to the console.
    #[default]
    Report,
    /// Print the error to stderr and exit the process with status `1`.
    Exit,
}

/// A logger that prints records to a console appender, optionally persists them, and then
/// acts on their class.
///
/// Every entry point is `#[track_caller]`: the record carries the file and line of the code
/// that called it.
///
/// # Examples
///
/// ```
/// let logger = stamplog::builder().build();
/// logger.complete("success", "service is up", None, false);
/// ```
#[derive(Debug)]
pub struct Logger {
    console: Box<dyn Append>,
    log_file: LogFile,
    timezone: TimeZone,
    persist_failure: PersistFailure,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(
        console: Box<dyn Append>,
        log_file: LogFile,
        timezone: TimeZone,
        persist_failure: PersistFailure,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            console,
            log_file,
            timezone,
            persist_failure,
            trap,
        }
    }

    /// Logs the file, line and timestamp of the caller.
    #[track_caller]
    pub fn simple(&self, persist: bool) {
        let record = self.record(Location::caller()).build();
        self.log(&record, persist);
    }

    /// Logs a status and acts on its class.
    ///
    /// `fatal` exits the process after printing; `panic` panics after printing.
    #[track_caller]
    pub fn status(&self, label: &str, persist: bool) {
        let record = self
            .record(Location::caller())
            .status(label)
            .severity(Some(Severity::from_label(label)))
            .build();
        self.log(&record, persist);
    }

    /// Logs a message.
    #[track_caller]
    pub fn message(&self, text: &str, persist: bool) {
        let record = self.record(Location::caller()).message(text).build();
        self.log(&record, persist);
    }

    /// Logs an error and acts on the given class.
    ///
    /// The class is not stored in the record. A missing error is logged as `<nil>`.
    #[track_caller]
    pub fn fault(&self, class: &str, err: Option<&dyn std::error::Error>, persist: bool) {
        let record = self
            .record(Location::caller())
            .fault(err)
            .severity(Some(Severity::from_label(class)))
            .build();
        self.log(&record, persist);
    }

    /// Logs a status, a message and an error, and acts on the status class.
    #[track_caller]
    pub fn complete(
        &self,
        status: &str,
        message: &str,
        err: Option<&dyn std::error::Error>,
        persist: bool,
    ) {
        let record = self
            .record(Location::caller())
            .status(status)
            .message(message)
            .fault(err)
            .severity(Some(Severity::from_label(status)))
            .build();
        self.log(&record, persist);
    }

    /// Ensures the log file exists and returns its path.
    pub fn start_log_file(&self) -> Result<PathBuf, Error> {
        self.log_file.start()
    }

    /// Returns the path of the log file.
    pub fn find_log_file(&self) -> Result<PathBuf, Error> {
        self.log_file.find()
    }

    /// Persists the record if asked to, prints it, then acts on its class.
    pub fn log(&self, record: &Record, persist: bool) {
        if persist {
            if let Err(err) = self.log_file.persist(record) {
                self.handle_persist_error(err);
            }
        }

        self.dispatch(record);
    }

    /// Prints the record to the console and performs the action of its class.
    ///
    /// Returns only for classes whose action is [`Action::Continue`].
    pub fn dispatch(&self, record: &Record) {
        if let Err(err) = self.console.append(record) {
            self.trap.trap(&err);
        }

        let action = record
            .severity()
            .map(Severity::action)
            .unwrap_or(Action::Continue);

        match action {
            Action::Continue => {}
            Action::Exit => {
                self.flush();
                std::process::exit(1);
            }
            Action::Abort => {
                self.flush();
                let text = TextLayout::default().no_color().render(record);
                panic!("{text}");
            }
        }
    }

    /// Flushes the console appender.
    pub fn flush(&self) {
        if let Err(err) = self.console.flush() {
            self.trap.trap(&err);
        }
    }

    pub(crate) fn record(&self, location: Location) -> RecordBuilder {
        Record::builder(location).timezone(self.timezone.clone())
    }

    fn handle_persist_error(&self, err: Error) {
        match self.persist_failure {
            PersistFailure::Report => self.trap.trap(&err),
            PersistFailure::Exit => {
                let _ = writeln!(std::io::stderr(), "stamplog: unable to save log to file: {err}");
                self.flush();
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;
    use std::panic;
    use std::panic::AssertUnwindSafe;
    use std::sync::Arc;
    use std::sync::Mutex;

    use serde_json::Value;
    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;
    use crate::layout::Layout;

    #[derive(Debug, Clone, Default)]
    struct Capture {
        blocks: Arc<Mutex<Vec<String>>>,
    }

    impl Capture {
        fn blocks(&self) -> Vec<String> {
            self.blocks.lock().unwrap().clone()
        }
    }

    impl Append for Capture {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let bytes = TextLayout::default().no_color().format(record)?;
            self.blocks
                .lock()
                .unwrap()
                .push(String::from_utf8_lossy(&bytes).into_owned());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Default)]
    struct CollectTrap {
        kinds: Arc<Mutex<Vec<ErrorKind>>>,
    }

    impl Trap for CollectTrap {
        fn trap(&self, err: &Error) {
            self.kinds.lock().unwrap().push(err.kind());
        }
    }

    fn logger(dir: &TempDir) -> (Logger, Capture, CollectTrap) {
        let capture = Capture::default();
        let trap = CollectTrap::default();
        let logger = builder()
            .console(capture.clone())
            .directory(dir.path())
            .trap(trap.clone())
            .build();
        (logger, capture, trap)
    }

    #[test]
    fn test_padded_status_is_stored_trimmed() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, capture, _) = logger(&temp_dir);
        let path = logger.start_log_file().unwrap();

        logger.status(" Success ", true);

        assert!(capture.blocks()[0].ends_with("\nStatus: success"));
        let content = fs::read_to_string(path).unwrap();
        let line: Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(line["status"], "success");
    }

    #[test]
    fn test_continue_classes_print_and_return() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, capture, _) = logger(&temp_dir);

        for label in ["success", "info", "error", "warning", "Success", "whatever", ""] {
            logger.status(label, false);
        }

        let blocks = capture.blocks();
        assert_eq!(blocks.len(), 7);
        assert!(blocks[0].ends_with("Status: success"));
        assert!(blocks[4].ends_with("Status: success"));
        assert!(blocks[5].ends_with("Status: whatever"));
        assert_eq!(blocks[6].lines().count(), 3);
    }

    #[test]
    fn test_entry_points_select_templates() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, capture, _) = logger(&temp_dir);
        let err = io::Error::other("disk full");

        let line = line!() + 1;
        logger.simple(false);
        logger.message("Hello World", false);
        logger.fault("warning", Some(&err), false);
        logger.complete("INFO", "Ready", None, false);

        let blocks = capture.blocks();
        assert_eq!(blocks.len(), 4);

        let first = blocks[0].lines().collect::<Vec<_>>();
        assert_eq!(first.len(), 3);
        assert!(first[0].starts_with("File: ") && first[0].ends_with("log_impl.rs"));
        assert_eq!(first[1], format!("Line: {line}"));
        assert!(first[2].starts_with("Timestamp: "));

        assert!(blocks[1].ends_with("\nMessage: hello world"));
        assert!(blocks[2].ends_with("\nFault: disk full"));
        assert!(!blocks[2].contains("Status:"));
        assert!(blocks[3].ends_with("\nStatus: info\nMessage: ready\nFault: <nil>"));
    }

    #[test]
    fn test_panic_class_unwinds_after_printing() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, capture, _) = logger(&temp_dir);
        let err = io::Error::other("out of memory");

        for class in ["panic", "PANIC", "Panic"] {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                logger.fault(class, Some(&err), false);
            }));

            let payload = result.unwrap_err();
            let text = payload.downcast_ref::<String>().unwrap();
            assert!(text.ends_with("Fault: out of memory"));
        }

        assert_eq!(capture.blocks().len(), 3);
    }

    #[test]
    fn test_persist_then_read_back() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, _, trap) = logger(&temp_dir);
        let path = logger.start_log_file().unwrap();

        logger.message("first", true);
        logger.complete("success", "service is up", None, true);

        let content = fs::read_to_string(path).unwrap();
        let last: Value = serde_json::from_str(content.lines().last().unwrap()).unwrap();
        assert!(last["file"].as_str().unwrap().ends_with("log_impl.rs"));
        assert_eq!(last["status"], "success");
        assert_eq!(last["message"], "service is up");
        assert_eq!(last["fault"], "<nil>");
        assert!(trap.kinds.lock().unwrap().is_empty());
    }

    #[test]
    fn test_persist_failure_is_reported_and_output_kept() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let (logger, capture, trap) = logger(&temp_dir);

        logger.status("info", true);

        assert_eq!(*trap.kinds.lock().unwrap(), vec![ErrorKind::NotFound]);
        assert_eq!(capture.blocks().len(), 1);
    }
}
