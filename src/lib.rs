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

//! Stamplog is a small structured-logging helper for command-line programs.
//!
//! # Overview
//!
//! Each call captures the file and line of the caller plus a timestamp, optionally adds a
//! status, a message and a fault, prints the result as a colored block, and can append the
//! record as one JSON line to a log file in the working directory.
//!
//! The status decides what happens after printing: `fatal` exits the process, `panic` panics,
//! and every other status returns control to the caller.
//!
//! # Examples
//!
//! Log with the default configuration:
//!
//! ```
//! stamplog::simple(false);
//! stamplog::complete("success", "service is up", None, false);
//! ```
//!
//! Persist records to a log file:
//!
//! ```no_run
//! stamplog::start_log_file().unwrap();
//!
//! let err = std::io::Error::other("connection refused");
//! stamplog::fault("warning", Some(&err), true);
//! ```
//!
//! Configure the global logger:
//!
//! ```
//! use stamplog::PersistFailure;
//! use stamplog::append;
//! use stamplog::layout::TextLayout;
//!
//! stamplog::builder()
//!     .console(append::Stdout::default().with_layout(TextLayout::default().no_color()))
//!     .filename("my_service.log")
//!     .persist_failure(PersistFailure::Exit)
//!     .apply();
//!
//! stamplog::status("info", false);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::path::PathBuf;

pub mod append;
pub mod bridge;
pub mod color;
pub mod layout;
pub mod record;
pub mod severity;
pub mod trap;

pub use append::Append;
pub use layout::Layout;
pub use trap::Trap;

mod error;
pub use error::Error;
pub use error::ErrorKind;

mod logger;
pub use logger::*;

/// Logs the file, line and timestamp of the caller with the global logger.
#[track_caller]
pub fn simple(persist: bool) {
    default_logger().simple(persist);
}

/// Logs a status with the global logger and acts on its class.
///
/// `fatal` exits the process after printing; `panic` panics after printing.
#[track_caller]
pub fn status(label: &str, persist: bool) {
    default_logger().status(label, persist);
}

/// Logs a message with the global logger.
#[track_caller]
pub fn message(text: &str, persist: bool) {
    default_logger().message(text, persist);
}

/// Logs an error with the global logger and acts on the given class.
#[track_caller]
pub fn fault(class: &str, err: Option<&dyn std::error::Error>, persist: bool) {
    default_logger().fault(class, err, persist);
}

/// Logs a status, a message and an error with the global logger, and acts on the status
/// class.
#[track_caller]
pub fn complete(status: &str, message: &str, err: Option<&dyn std::error::Error>, persist: bool) {
    default_logger().complete(status, message, err, persist);
}

/// Ensures the global logger's log file exists and returns its path.
pub fn start_log_file() -> Result<PathBuf, Error> {
    default_logger().start_log_file()
}

/// Returns the path of the global logger's log file.
pub fn find_log_file() -> Result<PathBuf, Error> {
    default_logger().find_log_file()
}
