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

use serde::Serialize;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;

/// A JSON layout for persisting log records.
///
/// Output format:
///
/// ```json
/// {"file":"src/main.rs","line":42,"timestamp":"2024-08-11T22:44:57+08:00","status":"success","message":"service is up","fault":"<nil>"}
/// {"file":"src/main.rs","line":43,"timestamp":"2024-08-11T22:44:58+08:00"}
/// ```
///
/// `status`, `message` and `fault` are omitted when the record does not carry them. The
/// record's class is never written.
///
/// # Examples
///
/// ```
/// use stamplog::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct JsonLayout {}

#[derive(Debug, Clone, Serialize)]
struct RecordLine<'a> {
    file: &'a str,
    line: u32,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<&'a str>,
}

impl Layout for JsonLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let record_line = RecordLine {
            file: record.file(),
            line: record.line(),
            timestamp: record.timestamp_rfc3339(),
            status: record.status(),
            message: record.message(),
            fault: record.fault(),
        };

        serde_json::to_vec(&record_line).map_err(Error::from_json_error)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz;
    use jiff::tz::TimeZone;
    use serde_json::Value;

    use super::*;
    use crate::record::Location;
    use crate::severity::Severity;

    #[test]
    fn test_complete_record() {
        let ts = Timestamp::from_second(1_723_387_497).unwrap();
        let record = Record::builder(Location::new("src/main.rs", 42))
            .timestamp(ts.to_zoned(TimeZone::fixed(tz::offset(8))))
            .status("success")
            .message("service is up")
            .fault(None)
            .severity(Some(Severity::Success))
            .build();

        let bytes = JsonLayout::default().format(&record).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"file":"src/main.rs","line":42,"timestamp":"2024-08-11T22:44:57+08:00","status":"success","message":"service is up","fault":"<nil>"}"#
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = Record::builder(Location::new("src/main.rs", 42))
            .message("hello")
            .build();

        let bytes = JsonLayout::default().format(&record).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["file"], "src/main.rs");
        assert_eq!(object["line"], 42);
        assert_eq!(object["message"], "hello");
        assert!(object.contains_key("timestamp"));
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("fault"));
        assert!(!object.contains_key("severity"));
    }
}
