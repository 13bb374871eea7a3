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

use std::fmt::Write;

use colored::Color;

use crate::Error;
use crate::color::LevelColor;
use crate::layout::Field;
use crate::layout::Layout;
use crate::layout::Template;
use crate::record::Record;

/// A layout that formats a record as an optionally colored block of text.
///
/// Output format:
///
/// ```text
/// File: src/main.rs
/// Line: 42
/// Timestamp: 2024-08-11T22:44:57+08:00
/// Status: success
/// Message: service is up
/// Fault: <nil>
/// ```
///
/// Only the fields selected by the record's [`Template`] are printed.
///
/// By default, values are colored by the record's class. Call [`no_color`](TextLayout::no_color)
/// to disable coloring. The `NO_COLOR` and `CLICOLOR` environment variables are honored as well.
///
/// # Examples
///
/// ```
/// use stamplog::layout::TextLayout;
///
/// let layout = TextLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
}

impl TextLayout {
    /// Customize the color of success logs. Default to green.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn success_color(mut self, color: Color) -> Self {
        self.colors.success = color;
        self
    }

    /// Customize the color of info logs. Default to blue.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn info_color(mut self, color: Color) -> Self {
        self.colors.info = color;
        self
    }

    /// Customize the color of warning and error logs. Default to yellow.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn warning_color(mut self, color: Color) -> Self {
        self.colors.warning = color;
        self
    }

    /// Customize the color of fatal logs. Default to magenta.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn fatal_color(mut self, color: Color) -> Self {
        self.colors.fatal = color;
        self
    }

    /// Customize the color of panic logs. Default to red.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn panic_color(mut self, color: Color) -> Self {
        self.colors.panic = color;
        self
    }

    /// Customize the color of logs without a class. Default to cyan.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn plain_color(mut self, color: Color) -> Self {
        self.colors.plain = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Renders the record as text, one `Label: value` line per field.
    pub fn render(&self, record: &Record) -> String {
        let severity = record.severity();
        let mut text = String::new();

        for (i, field) in Template::of(record).fields().iter().enumerate() {
            let value = match field {
                Field::File => record.file().to_string(),
                Field::Line => record.line().to_string(),
                Field::Timestamp => record.timestamp_rfc3339(),
                Field::Status => record.status().unwrap_or_default().to_string(),
                Field::Message => record.message().unwrap_or_default().to_string(),
                Field::Fault => record.fault().unwrap_or_default().to_string(),
            };
            let value = self.colors.colorize(self.no_color, severity, &value);

            if i > 0 {
                text.push('\n');
            }
            // SAFETY: write to a string always succeeds
            write!(&mut text, "{}: {value}", field.label()).unwrap();
        }

        text
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        Ok(self.render(record).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::record::Location;
    use crate::record::RecordBuilder;
    use crate::severity::Severity;

    fn builder() -> RecordBuilder {
        let ts = Timestamp::from_second(1_723_387_497).unwrap();
        Record::builder(Location::new("src/main.rs", 42))
            .timestamp(ts.to_zoned(TimeZone::fixed(tz::offset(8))))
    }

    #[test]
    fn test_minimal_template() {
        let record = builder().build();
        let text = TextLayout::default().no_color().render(&record);
        assert_eq!(
            text,
            "File: src/main.rs\nLine: 42\nTimestamp: 2024-08-11T22:44:57+08:00"
        );
    }

    #[test]
    fn test_full_template() {
        let record = builder()
            .status("Success")
            .message("Service is up")
            .fault(None)
            .severity(Some(Severity::Success))
            .build();
        let text = TextLayout::default().no_color().render(&record);
        insta::assert_snapshot!(text, @r"
        File: src/main.rs
        Line: 42
        Timestamp: 2024-08-11T22:44:57+08:00
        Status: success
        Message: service is up
        Fault: <nil>
        ");
    }

    #[test]
    fn test_partial_combination_renders_populated_fields() {
        let record = builder().status("warning").fault_text("disk full").build();
        let text = TextLayout::default().no_color().render(&record);
        assert_eq!(
            text,
            "File: src/main.rs\nLine: 42\nTimestamp: 2024-08-11T22:44:57+08:00\nStatus: warning\nFault: disk full"
        );
    }

    #[test]
    fn test_colored_output_keeps_values() {
        let record = builder()
            .message("hello")
            .severity(Some(Severity::Info))
            .build();
        let text = TextLayout::default().render(&record);
        assert!(text.contains("Message: "));
        assert!(text.contains("hello"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_format_matches_render() {
        let record = builder().message("hello").build();
        let layout = TextLayout::default().no_color();
        let bytes = layout.format(&record).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), layout.render(&record));
    }
}
