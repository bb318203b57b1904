//! JSON persistence for the ~/.skyflap/ high-score file.
//!
//! Missing or unreadable files degrade to the default value; the game never
//! surfaces a persistence error to the player.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::HIGH_SCORE_FILE;

/// Get the ~/.skyflap/ directory path, creating it if needed.
pub fn save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".skyflap");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.skyflap/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(save_dir()?.join(filename))
}

/// Load a JSON file from ~/.skyflap/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.skyflap/.
pub fn save_json<T: Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// The one durable value: the best score across all sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Read the high score at startup. Absent or corrupt files count as zero.
    pub fn load() -> Self {
        load_json_or_default(HIGH_SCORE_FILE)
    }

    /// Take a finished session's score; returns true if it set a new best.
    /// The caller decides when to write the new best to disk.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Write the current best to disk.
    pub fn save(&self) -> io::Result<()> {
        save_json(HIGH_SCORE_FILE, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_dir_exists() {
        let dir = save_dir().expect("save_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".skyflap"));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".skyflap/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let score: HighScore = load_json_or_default("nonexistent_test_file_98765.json");
        assert_eq!(score.best, 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let data = HighScore { best: 37 };
        save_json("high_score_roundtrip_test.json", &data).expect("save should succeed");

        let loaded: HighScore = load_json_or_default("high_score_roundtrip_test.json");
        assert_eq!(loaded.best, 37);

        // Cleanup
        let path = save_path("high_score_roundtrip_test.json").unwrap();
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_record_keeps_maximum() {
        let mut high = HighScore { best: 10 };
        assert!(high.record(15));
        assert_eq!(high.best, 15);
        assert!(!high.record(5));
        assert_eq!(high.best, 15);
        assert!(!high.record(15));
        assert_eq!(high.best, 15);
    }
}
