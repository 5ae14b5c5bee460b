use crate::consts;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the high score between runs
pub(crate) trait HighScoreStore {
    /// Return the stored high score, or 0 if there is none
    fn load_high_score(&mut self) -> u32;

    fn save_high_score(&mut self, score: u32);
}

/// A [`HighScoreStore`] backed by a JSON file.
///
/// Failures to read or write the file are logged and otherwise ignored: a
/// missing or unreadable file reads as a high score of 0, and a failed write
/// leaves the high score known only to the running game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    /// `None` if high scores should not be stored on disk
    path: Option<PathBuf>,
}

impl HighScoreFile {
    pub(crate) fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path: Some(path) }
    }

    pub(crate) fn disabled() -> HighScoreFile {
        HighScoreFile { path: None }
    }
}

impl HighScoreStore for HighScoreFile {
    fn load_high_score(&mut self) -> u32 {
        let Some(path) = self.path.as_deref() else {
            return 0;
        };
        match HighScores::load(path) {
            Ok(scores) => scores.get(consts::HIGH_SCORE_KEY).unwrap_or(0),
            Err(e) => {
                warn!("{:#}", anyhow::Error::new(e));
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        // Keep whatever else is in the file, unless it can't be read
        let mut scores = HighScores::load(path).unwrap_or_else(|e| {
            warn!("{:#}", anyhow::Error::new(e));
            HighScores::default()
        });
        scores.set(consts::HIGH_SCORE_KEY, score);
        match scores.save(path) {
            Ok(()) => info!("Saved high score {score} to {}", path.display()),
            Err(e) => warn!("{:#}", anyhow::Error::new(e)),
        }
    }
}

/// The contents of the high score file: a map from keys to scores
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
struct HighScores(BTreeMap<String, u32>);

impl HighScores {
    fn load(path: &Path) -> Result<HighScores, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HighScores::default()),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src).map_err(LoadError::deserialize)
    }

    fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(self).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<u32> {
        self.0.get(key).copied()
    }

    fn set(&mut self, key: &str, score: u32) {
        self.0.insert(key.to_owned(), score);
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high scores")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high scores")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let mut store = HighScoreFile::new(tmpdir.path().join("highscore.json"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("highscore.json");
        let mut store = HighScoreFile::new(path.clone());
        store.save_high_score(120);
        assert_eq!(store.load_high_score(), 120);
        let src = fs_err::read_to_string(&path).unwrap();
        assert_eq!(src, "{\"snake-high-score\":120}\n");
    }

    #[test]
    fn save_keeps_other_keys() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.json");
        fs_err::write(&path, "{\"other-game\": 7, \"snake-high-score\": 30}").unwrap();
        let mut store = HighScoreFile::new(path.clone());
        assert_eq!(store.load_high_score(), 30);
        store.save_high_score(50);
        let src = fs_err::read_to_string(&path).unwrap();
        assert_eq!(src, "{\"other-game\":7,\"snake-high-score\":50}\n");
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.json");
        fs_err::write(&path, "not json").unwrap();
        let mut store = HighScoreFile::new(path.clone());
        assert_eq!(store.load_high_score(), 0);
        store.save_high_score(20);
        assert_eq!(store.load_high_score(), 20);
    }

    #[test]
    fn unwritable_path_is_ignored() {
        let tmpdir = tempdir().unwrap();
        // A directory can't be written to as a file
        let mut store = HighScoreFile::new(tmpdir.path().to_path_buf());
        store.save_high_score(40);
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn disabled_store() {
        let mut store = HighScoreFile::disabled();
        store.save_high_score(40);
        assert_eq!(store.load_high_score(), 0);
    }
}
