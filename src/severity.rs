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

//! Severity classes and the terminal action each one triggers.

use std::fmt;
use std::str::FromStr;

/// The class of a log call, derived from its status label.
///
/// Labels are matched case-insensitively. Anything outside the fixed vocabulary,
/// including the empty string, classifies as [`Severity::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
    Fatal,
    Panic,
    Unclassified,
}

/// What happens after a record has been printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Return control to the caller.
    Continue,
    /// Terminate the process with a failure status. No destructors run.
    Exit,
    /// Panic with the rendered block, unwinding the calling thread.
    Abort,
}

impl Severity {
    /// Classifies a status label.
    pub fn from_label(label: &str) -> Severity {
        let label = label.trim();
        if label.eq_ignore_ascii_case("success") {
            Severity::Success
        } else if label.eq_ignore_ascii_case("info") {
            Severity::Info
        } else if label.eq_ignore_ascii_case("warning") {
            Severity::Warning
        } else if label.eq_ignore_ascii_case("error") {
            Severity::Error
        } else if label.eq_ignore_ascii_case("fatal") {
            Severity::Fatal
        } else if label.eq_ignore_ascii_case("panic") {
            Severity::Panic
        } else {
            Severity::Unclassified
        }
    }

    /// The terminal action for this class.
    pub fn action(self) -> Action {
        match self {
            Severity::Fatal => Action::Exit,
            Severity::Panic => Action::Abort,
            Severity::Success
            | Severity::Info
            | Severity::Warning
            | Severity::Error
            | Severity::Unclassified => Action::Continue,
        }
    }

    /// The canonical label of this class, or `None` for unclassified labels.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Severity::Success => Some("success"),
            Severity::Info => Some("info"),
            Severity::Warning => Some("warning"),
            Severity::Error => Some("error"),
            Severity::Fatal => Some("fatal"),
            Severity::Panic => Some("panic"),
            Severity::Unclassified => None,
        }
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from_label(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("unclassified"))
    }
}
