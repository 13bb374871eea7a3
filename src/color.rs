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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::severity::Severity;

/// Colors for the different severity classes.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for success logs.
    pub success: Color,
    /// Color for info logs.
    pub info: Color,
    /// Color for warning and error logs.
    pub warning: Color,
    /// Color for fatal logs.
    pub fatal: Color,
    /// Color for panic logs.
    pub panic: Color,
    /// Color for logs without a class, such as simple and message logs.
    pub plain: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Yellow,
            fatal: Color::Magenta,
            panic: Color::Red,
            plain: Color::Cyan,
        }
    }
}

impl LevelColor {
    /// The color for a record's class. Unclassified records are not colored.
    pub fn color_of(&self, severity: Option<Severity>) -> Option<Color> {
        match severity {
            None => Some(self.plain),
            Some(Severity::Success) => Some(self.success),
            Some(Severity::Info) => Some(self.info),
            Some(Severity::Warning | Severity::Error) => Some(self.warning),
            Some(Severity::Fatal) => Some(self.fatal),
            Some(Severity::Panic) => Some(self.panic),
            Some(Severity::Unclassified) => None,
        }
    }

    /// Colorize a value for the given class.
    pub fn colorize(
        &self,
        no_color: bool,
        severity: Option<Severity>,
        value: &str,
    ) -> ColoredString {
        match self.color_of(severity) {
            Some(color) if !no_color => ColoredString::from(value).color(color),
            _ => ColoredString::from(value),
        }
    }
}
