use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures reading or writing the score file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file io: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Load-once, save-on-record persistence for the single high-score scalar.
///
/// The ratchet lives here: [`record`] persists only strictly greater scores,
/// so the stored value never decreases within or across sessions.
///
/// [`record`]: HighScoreStore::record
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store over the platform-correct score file path.
    #[must_use]
    pub fn open() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);

        Self::at(base)
    }

    /// Creates a store over an explicit path.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored high score.
    ///
    /// Returns `Ok(0)` when the file does not yet exist (first run). Returns
    /// `Err` when the file exists but cannot be read or parsed, so the
    /// caller can surface a warning before entering raw terminal mode.
    pub fn load(&self) -> Result<u32, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    /// Persists `score` as the new high score when it beats `current`.
    ///
    /// Returns the ratcheted value; the file is untouched unless `score`
    /// is strictly greater.
    pub fn record(&self, current: u32, score: u32) -> Result<u32, StoreError> {
        if score <= current {
            return Ok(current);
        }

        self.save(score)?;
        Ok(score)
    }

    fn save(&self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::HighScoreStore;

    #[test]
    fn record_then_load_round_trips() {
        let store = HighScoreStore::at(unique_test_path("round_trip"));

        let ratcheted = store.record(0, 42).expect("record should succeed");
        assert_eq!(ratcheted, 42);
        assert_eq!(store.load().expect("load should succeed"), 42);

        cleanup_test_path(&store);
    }

    #[test]
    fn missing_score_file_loads_as_zero() {
        let store = HighScoreStore::at(unique_test_path("missing"));
        // Deliberately never created.
        assert_eq!(store.load().expect("missing file should load as 0"), 0);
    }

    #[test]
    fn malformed_score_file_is_an_error() {
        let store = HighScoreStore::at(unique_test_path("malformed"));
        if let Some(parent) = store.path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&store.path, "not-json").expect("test file write should succeed");

        assert!(store.load().is_err(), "malformed file should return Err");

        cleanup_test_path(&store);
    }

    #[test]
    fn ratchet_only_moves_upward() {
        let store = HighScoreStore::at(unique_test_path("ratchet"));

        // Score 7 over a stored 5 persists 7.
        assert_eq!(store.record(5, 7).expect("record should succeed"), 7);
        assert_eq!(store.load().expect("load should succeed"), 7);

        // Score 3 under 7 leaves 7 in place without touching the file.
        assert_eq!(store.record(7, 3).expect("record should succeed"), 7);
        assert_eq!(store.load().expect("load should succeed"), 7);

        // An equal score is not a new high score.
        assert_eq!(store.record(7, 7).expect("record should succeed"), 7);

        cleanup_test_path(&store);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(store: &HighScoreStore) {
        let _ = fs::remove_file(&store.path);
        if let Some(parent) = store.path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
