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

use crate::record::Record;

/// A field of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    File,
    Line,
    Timestamp,
    Status,
    Message,
    Fault,
}

impl Field {
    /// The label printed before the value.
    pub fn label(self) -> &'static str {
        match self {
            Field::File => "File",
            Field::Line => "Line",
            Field::Timestamp => "Timestamp",
            Field::Status => "Status",
            Field::Message => "Message",
            Field::Fault => "Fault",
        }
    }
}

/// The shape of a rendered block, chosen from the optional fields a record carries.
///
/// Every combination of status, message and fault maps to exactly one template. A template
/// lists the mandatory fields followed by each populated optional field, in the fixed order
/// file, line, timestamp, status, message, fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Minimal,
    Status,
    Message,
    Fault,
    StatusMessage,
    StatusFault,
    MessageFault,
    Full,
}

impl Template {
    /// Selects the template for a record.
    pub fn of(record: &Record) -> Template {
        let status = record.status().is_some();
        let message = record.message().is_some();
        let fault = record.fault().is_some();

        match (status, message, fault) {
            (false, false, false) => Template::Minimal,
            (true, false, false) => Template::Status,
            (false, true, false) => Template::Message,
            (false, false, true) => Template::Fault,
            (true, true, false) => Template::StatusMessage,
            (true, false, true) => Template::StatusFault,
            (false, true, true) => Template::MessageFault,
            (true, true, true) => Template::Full,
        }
    }

    /// The fields this template renders, in order.
    pub fn fields(self) -> &'static [Field] {
        use Field::*;

        match self {
            Template::Minimal => &[File, Line, Timestamp],
            Template::Status => &[File, Line, Timestamp, Status],
            Template::Message => &[File, Line, Timestamp, Message],
            Template::Fault => &[File, Line, Timestamp, Fault],
            Template::StatusMessage => &[File, Line, Timestamp, Status, Message],
            Template::StatusFault => &[File, Line, Timestamp, Status, Fault],
            Template::MessageFault => &[File, Line, Timestamp, Message, Fault],
            Template::Full => &[File, Line, Timestamp, Status, Message, Fault],
        }
    }
}
