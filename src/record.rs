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

//! Log record and caller location.

use std::borrow::Cow;
use std::fmt;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::severity::Severity;

/// The text stored as fault when a call carries no error.
pub const NIL_FAULT: &str = "<nil>";

const RFC3339_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// The source position of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    /// The location of the caller.
    ///
    /// Inside a `#[track_caller]` function this resolves to that function's caller, so every
    /// public entry point of this crate reports the line that invoked it.
    #[track_caller]
    pub fn caller() -> Location {
        let location = std::panic::Location::caller();
        Location {
            file: location.file(),
            line: location.line(),
        }
    }

    /// Creates a location from its parts.
    pub fn new(file: &'static str, line: u32) -> Location {
        Location { file, line }
    }

    /// The source file.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log event.
///
/// `file`, `line` and `timestamp` are always present. `status`, `message` and `fault` are
/// independently optional. Records are assembled with [`RecordBuilder`] and never modified
/// afterwards.
#[derive(Clone, Debug)]
pub struct Record {
    file: Cow<'static, str>,
    line: u32,
    timestamp: Zoned,
    status: Option<String>,
    message: Option<String>,
    fault: Option<String>,

    // dispatch class; never persisted
    severity: Option<Severity>,
}

impl Record {
    /// Returns a new builder for a record at the given location.
    pub fn builder(location: Location) -> RecordBuilder {
        RecordBuilder::new(location)
    }

    /// The source file of the call site.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line of the call site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The moment the record was created.
    pub fn timestamp(&self) -> &Zoned {
        &self.timestamp
    }

    /// The timestamp as RFC 3339 with second precision, e.g. `2024-08-11T22:44:57+08:00`.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.strftime(RFC3339_SECONDS).to_string()
    }

    /// The lowercased status label.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The lowercased message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The fault text.
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// The dispatch class, or `None` for purely informational records.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }
}

/// Builder for [`Record`].
///
/// # Examples
///
/// ```
/// use stamplog::record::Location;
/// use stamplog::record::Record;
///
/// let record = Record::builder(Location::caller())
///     .status("Success")
///     .message("Service is UP")
///     .build();
///
/// assert_eq!(record.status(), Some("success"));
/// assert_eq!(record.message(), Some("service is up"));
/// assert_eq!(record.fault(), None);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Creates a builder stamped with the current time in the system time zone.
    pub fn new(location: Location) -> Self {
        Self {
            record: Record {
                file: Cow::Borrowed(location.file()),
                line: location.line(),
                timestamp: Zoned::now(),
                status: None,
                message: None,
                fault: None,
                severity: None,
            },
        }
    }

    /// Overrides the source file.
    pub fn file(mut self, file: impl Into<Cow<'static, str>>) -> Self {
        self.record.file = file.into();
        self
    }

    /// Overrides the line.
    pub fn line(mut self, line: u32) -> Self {
        self.record.line = line;
        self
    }

    /// Overrides the timestamp.
    pub fn timestamp(mut self, timestamp: Zoned) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    /// Re-expresses the timestamp in the given time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        let ts: Timestamp = self.record.timestamp.timestamp();
        self.record.timestamp = ts.to_zoned(tz);
        self
    }

    /// Sets the status, trimmed and lowercased. Blank labels leave the status unset.
    pub fn status(mut self, status: &str) -> Self {
        self.record.status = non_empty(status.trim().to_lowercase());
        self
    }

    /// Sets the message. Empty messages leave the message unset.
    pub fn message(mut self, message: &str) -> Self {
        self.record.message = non_empty(message.to_lowercase());
        self
    }

    /// Sets the fault from an optional error.
    ///
    /// A missing error is recorded as [`NIL_FAULT`].
    pub fn fault(mut self, err: Option<&dyn std::error::Error>) -> Self {
        self.record.fault = match err {
            Some(err) => non_empty(err.to_string()),
            None => Some(NIL_FAULT.to_string()),
        };
        self
    }

    /// Sets the fault text verbatim. Empty text leaves the fault unset.
    pub fn fault_text(mut self, fault: impl Into<String>) -> Self {
        self.record.fault = non_empty(fault.into());
        self
    }

    /// Sets the dispatch class.
    pub fn severity(mut self, severity: Option<Severity>) -> Self {
        self.record.severity = severity;
        self
    }

    /// Builds the record.
    pub fn build(self) -> Record {
        self.record
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
