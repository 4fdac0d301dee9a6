//! Resumable quiz progress.
//!
//! Progress is written after every answer and every move between questions,
//! read once when a quiz starts and removed when it finishes or restarts.
//! Stored blobs that do not have the expected shape are ignored so that a
//! damaged file can never block the check-in.

use crate::mood::questions::{AnswerVector, Severity, EMPTY_ANSWERS, QUESTION_COUNT};
use directories::ProjectDirs;
use serde::Serialize;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Name under which quiz progress is stored.
pub const STORAGE_KEY: &str = "hoper-mood-quiz-progress";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProgress {
    pub current_index: usize,
    pub answers: AnswerVector,
}

impl Default for StoredProgress {
    fn default() -> Self {
        Self {
            current_index: 0,
            answers: EMPTY_ANSWERS,
        }
    }
}

impl StoredProgress {
    pub fn encode(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(StoreError::Encode)
    }
}

/// Parse a stored progress blob.
///
/// Returns `None` for anything that is not an object with a non-negative
/// integer `currentIndex` and an `answers` array of `null`/`0`/`1`/`2`.
/// Longer answer arrays are truncated and shorter ones padded with unanswered
/// slots; the index is clamped to the last question.
pub fn decode_progress(raw: &str) -> Option<StoredProgress> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("ignoring unreadable quiz progress: {err}");
            return None;
        }
    };

    let progress = progress_from_value(&value);
    if progress.is_none() {
        warn!("ignoring quiz progress with unexpected shape");
    }
    progress
}

fn progress_from_value(value: &Value) -> Option<StoredProgress> {
    let index = value.get("currentIndex")?.as_u64()?;
    let entries = value.get("answers")?.as_array()?;

    let mut answers = EMPTY_ANSWERS;
    for (slot, entry) in answers.iter_mut().zip(entries) {
        *slot = match entry {
            Value::Null => None,
            other => Some(
                other
                    .as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(Severity::new)?,
            ),
        };
    }

    let current_index = usize::try_from(index)
        .unwrap_or(usize::MAX)
        .min(QUESTION_COUNT - 1);

    Some(StoredProgress {
        current_index,
        answers,
    })
}

#[derive(Debug)]
pub enum StoreError {
    /// Writing or removing the backing file failed.
    Io { path: PathBuf, source: io::Error },
    /// Progress could not be encoded as JSON.
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "Failed to update quiz progress at {}: {}", path.display(), source)
            }
            StoreError::Encode(source) => write!(f, "Failed to encode quiz progress: {source}"),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Encode(source) => Some(source),
        }
    }
}

/// Client-local key-value slot holding one quiz's progress.
pub trait QuizStore {
    fn load(&self) -> Option<StoredProgress>;
    fn save(&mut self, progress: &StoredProgress) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Keeps the encoded blob in memory, the way a browser's local storage would.
#[derive(Debug, Default, Clone)]
pub struct MemoryQuizStore {
    raw: Option<String>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary blob, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl QuizStore for MemoryQuizStore {
    fn load(&self) -> Option<StoredProgress> {
        self.raw.as_deref().and_then(decode_progress)
    }

    fn save(&mut self, progress: &StoredProgress) -> Result<(), StoreError> {
        self.raw = Some(progress.encode()?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.raw = None;
        Ok(())
    }
}

/// Stores progress as a JSON file, replacing it atomically on every save.
#[derive(Debug, Clone)]
pub struct FileQuizStore {
    path: PathBuf,
}

impl FileQuizStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/hoper-mood-quiz-progress.json` for the current platform.
    pub fn default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("org", "hoper", "hoper")?;
        Some(Self::new(dirs.data_dir().join(format!("{STORAGE_KEY}.json"))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl QuizStore for FileQuizStore {
    fn load(&self) -> Option<StoredProgress> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => decode_progress(&raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("could not read quiz progress at {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, progress: &StoredProgress) -> Result<(), StoreError> {
        let contents = progress.encode()?;
        let parent = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir).map_err(|err| self.io_error(err))?;
        }

        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(|err| self.io_error(err))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|err| self.io_error(err))?;
        temp_file
            .persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        debug!("saved quiz progress to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn answers(values: [Option<u8>; QUESTION_COUNT]) -> AnswerVector {
        values.map(|value| value.and_then(Severity::new))
    }

    #[test]
    fn decodes_a_partial_quiz() {
        let progress =
            decode_progress(r#"{"currentIndex":5,"answers":[0,1,null,2,1,null,null,null]}"#)
                .expect("progress should decode");
        assert_eq!(progress.current_index, 5);
        assert_eq!(
            progress.answers,
            answers([Some(0), Some(1), None, Some(2), Some(1), None, None, None])
        );
    }

    #[test]
    fn rejects_malformed_blobs() {
        for raw in [
            "not json",
            "null",
            "[]",
            r#"{"answers":[0,1]}"#,
            r#"{"currentIndex":"2","answers":[]}"#,
            r#"{"currentIndex":-1,"answers":[]}"#,
            r#"{"currentIndex":1,"answers":"0,1"}"#,
            r#"{"currentIndex":1,"answers":[0,3]}"#,
            r#"{"currentIndex":1,"answers":[0,"1"]}"#,
        ] {
            assert!(decode_progress(raw).is_none(), "{raw} should be rejected");
        }
    }

    #[test]
    fn pads_truncates_and_clamps() {
        let short = decode_progress(r#"{"currentIndex":42,"answers":[2]}"#).unwrap();
        assert_eq!(short.current_index, QUESTION_COUNT - 1);
        assert_eq!(short.answers[0], Some(Severity::HIGH));
        assert!(short.answers[1..].iter().all(Option::is_none));

        let long = decode_progress(r#"{"currentIndex":0,"answers":[1,1,1,1,1,1,1,1,1,1]}"#)
            .unwrap();
        assert!(long.answers.iter().all(|a| *a == Some(Severity::MODERATE)));
    }

    #[test]
    fn encodes_with_camel_case_index() {
        let progress = StoredProgress {
            current_index: 2,
            answers: answers([Some(1), None, None, None, None, None, None, None]),
        };
        assert_eq!(
            progress.encode().unwrap(),
            r#"{"currentIndex":2,"answers":[1,null,null,null,null,null,null,null]}"#
        );
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let mut store = MemoryQuizStore::new();
        assert!(store.load().is_none());

        let progress = StoredProgress {
            current_index: 3,
            ..Default::default()
        };
        store.save(&progress).unwrap();
        assert_eq!(store.load(), Some(progress));

        store.clear().unwrap();
        assert!(store.raw().is_none());
    }

    #[test]
    fn file_store_persists_between_instances() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("nested").join("progress.json");

        let mut store = FileQuizStore::new(&path);
        assert!(store.load().is_none());
        let progress = StoredProgress {
            current_index: 4,
            answers: answers([Some(2), Some(2), Some(0), Some(1), None, None, None, None]),
        };
        store.save(&progress).unwrap();

        let reopened = FileQuizStore::new(&path);
        assert_eq!(reopened.load(), Some(progress));

        store.clear().unwrap();
        assert!(!path.exists());
        store.clear().expect("clearing twice is fine");
    }

    #[test]
    fn file_store_ignores_corrupt_contents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("progress.json");
        fs::write(&path, "{\"currentIndex\": 2, \"answers\": ").unwrap();

        assert!(FileQuizStore::new(&path).load().is_none());
    }
}
