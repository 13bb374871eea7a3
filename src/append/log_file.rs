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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::ErrorKind;
use crate::layout::JsonLayout;
use crate::layout::Layout;
use crate::record::Record;

/// The name of the log file unless configured otherwise.
pub const DEFAULT_FILENAME: &str = "stamplog.log";

/// An appender that persists records to a single append-only file.
///
/// Each record is written as one JSON object followed by a newline. The file lives in the
/// process working directory unless [`directory`](LogFile::directory) is set; the working
/// directory is resolved on every call.
///
/// The file must exist before records can be persisted; see [`start`](LogFile::start).
///
/// # Examples
///
/// ```no_run
/// use stamplog::append::LogFile;
///
/// let log_file = LogFile::default().directory("/var/log/my-service");
/// let path = log_file.start().unwrap();
/// assert_eq!(log_file.find().unwrap(), path);
/// ```
#[derive(Debug)]
pub struct LogFile {
    directory: Option<PathBuf>,
    filename: String,
    layout: Box<dyn Layout>,

    // serializes find-open-write-close; guards no data
    lock: Mutex<()>,
}

impl Default for LogFile {
    fn default() -> Self {
        LogFile::new(DEFAULT_FILENAME)
    }
}

impl LogFile {
    /// Creates a log file appender for the given file name in the working directory.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            directory: None,
            filename: filename.into(),
            layout: Box::new(JsonLayout::default()),
            lock: Mutex::new(()),
        }
    }

    /// Sets the directory holding the log file.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the layout for persisted records.
    ///
    /// Default to [`JsonLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// The configured file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    fn resolve_directory(&self) -> Result<PathBuf, Error> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|err| {
                Error::new(ErrorKind::Environment, "failed to get working directory")
                    .with_source(err)
            }),
        }
    }

    /// Ensures the log file exists, creating an empty one if needed.
    ///
    /// An existing file is left untouched. Returns the path of the file.
    pub fn start(&self) -> Result<PathBuf, Error> {
        let dir = self.resolve_directory()?;
        fs::create_dir_all(&dir).map_err(|err| {
            Error::new(ErrorKind::FileIo, "failed to create log directory")
                .with_context("directory", dir.display())
                .with_source(err)
        })?;

        let path = dir.join(&self.filename);
        open_append(&path)?;
        Ok(path)
    }

    /// Looks for the log file.
    ///
    /// Fails if no regular file in the directory carries the configured file name. Symbolic
    /// links are followed, so a link to a regular file counts as the log file.
    pub fn find(&self) -> Result<PathBuf, Error> {
        let dir = self.resolve_directory()?;
        let entries = fs::read_dir(&dir).map_err(|err| {
            Error::new(ErrorKind::FileIo, "failed to list log directory")
                .with_context("directory", dir.display())
                .with_source(err)
        })?;

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_str() == Some(self.filename.as_str()))
            .map(|entry| entry.path())
            .find(|path| fs::metadata(path).map(|m| m.is_file()).unwrap_or(false))
            .ok_or_else(|| {
                Error::new(ErrorKind::NotFound, "log file not found")
                    .with_context("directory", dir.display())
                    .with_context("filename", &self.filename)
            })
    }

    /// Appends the record to the log file.
    ///
    /// Calls through the same appender never interleave.
    pub fn persist(&self, record: &Record) -> Result<(), Error> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let path = self.find()?;
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');

        let mut file = open_append(&path)?;
        file.write_all(&bytes).map_err(|err| {
            Error::new(ErrorKind::FileIo, "failed to write log file")
                .with_context("path", path.display())
                .with_source(err)
        })?;
        file.flush().map_err(|err| {
            Error::new(ErrorKind::FileIo, "failed to flush log file")
                .with_context("path", path.display())
                .with_source(err)
        })?;
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, Error> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path).map_err(|err| {
        Error::new(ErrorKind::FileIo, "failed to open log file")
            .with_context("path", path.display())
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use serde_json::Value;
    use tempfile::TempDir;

    use super::*;
    use crate::layout::TextLayout;
    use crate::record::Location;

    #[test]
    fn test_find_without_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::default().directory(temp_dir.path());

        let err = log_file.find().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_start_then_find() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::default().directory(temp_dir.path());

        let path = log_file.start().unwrap();
        assert_eq!(path, temp_dir.path().join(DEFAULT_FILENAME));
        assert_eq!(log_file.find().unwrap(), path);
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_start_keeps_existing_content() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::new("app.log").directory(temp_dir.path());
        fs::write(temp_dir.path().join("app.log"), "existing\n").unwrap();

        let path = log_file.start().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "existing\n");
    }

    #[test]
    fn test_start_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let dir = temp_dir.path().join("nested").join("logs");
        let log_file = LogFile::default().directory(&dir);

        let path = log_file.start().unwrap();
        assert!(path.starts_with(&dir));
        assert!(path.is_file());
    }

    #[test]
    fn test_directory_named_like_log_file_is_ignored() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        fs::create_dir(temp_dir.path().join(DEFAULT_FILENAME)).unwrap();
        let log_file = LogFile::default().directory(temp_dir.path());

        assert_eq!(log_file.find().unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_log_file_is_found() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let target = temp_dir.path().join("real.log");
        fs::write(&target, "").unwrap();
        let link = temp_dir.path().join(DEFAULT_FILENAME);
        std::os::unix::fs::symlink(&target, &link).unwrap();
        let log_file = LogFile::default().directory(temp_dir.path());

        assert_eq!(log_file.start().unwrap(), link);
        assert_eq!(log_file.find().unwrap(), link);

        let record = Record::builder(Location::caller())
            .message("through link")
            .build();
        log_file.persist(&record).unwrap();
        let content = fs::read_to_string(&target).unwrap();
        let line: Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(line["message"], "through link");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_not_found() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let link = temp_dir.path().join(DEFAULT_FILENAME);
        std::os::unix::fs::symlink(temp_dir.path().join("missing.log"), &link).unwrap();
        let log_file = LogFile::default().directory(temp_dir.path());

        assert_eq!(log_file.find().unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_persist_requires_started_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::default().directory(temp_dir.path());
        let record = Record::builder(Location::caller()).build();

        let err = log_file.persist(&record).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!temp_dir.path().join(DEFAULT_FILENAME).exists());
    }

    #[test]
    fn test_persist_appends_json_lines() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::default().directory(temp_dir.path());
        let path = log_file.start().unwrap();

        let first = generate_random_string();
        let second = generate_random_string();
        for message in [&first, &second] {
            let record = Record::builder(Location::caller()).message(message).build();
            log_file.persist(&record).unwrap();
        }

        let content = fs::read_to_string(path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);

        let last: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["message"], second.to_lowercase());
        assert!(last["file"].as_str().unwrap().ends_with("log_file.rs"));
    }

    #[test]
    fn test_persist_with_text_layout() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let log_file = LogFile::new("plain.log")
            .directory(temp_dir.path())
            .with_layout(TextLayout::default().no_color());
        let path = log_file.start().unwrap();

        let record = Record::builder(Location::new("src/main.rs", 7))
            .status("info")
            .build();
        log_file.persist(&record).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "File: src/main.rs");
        assert_eq!(lines[1], "Line: 7");
        assert_eq!(lines[3], "Status: info");
        assert!(content.ends_with('\n'));
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        let random_string: String = std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect();

        random_string
    }
}
