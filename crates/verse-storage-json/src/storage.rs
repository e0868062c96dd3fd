use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use verse_core::Poem;
use verse_storage::Storage;

/// File-backed storage: the whole poem list as one JSON document.
/// Best effort: a missing file loads as an empty list, and saves create
/// the parent directory as needed.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Poem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let s = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let poems: Vec<Poem> =
            serde_json::from_str(&s).with_context(|| format!("parse {}", self.path.display()))?;
        Ok(poems)
    }

    fn save(&self, poems: &[Poem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let s = serde_json::to_string_pretty(poems).context("serialize poem list")?;
        std::fs::write(&self.path, s).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use verse_core::Style;

    fn poem(text: &str, doom: u8) -> Poem {
        Poem {
            text: text.to_string(),
            style: Style::Haiku,
            prompt: "Write a haiku about nature.".to_string(),
            doom,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("poems.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("poems.json"));
        let poems = vec![poem("second\npoem", 100), poem("first", 0)];
        storage.save(&poems).unwrap();
        assert_eq!(storage.load().unwrap(), poems);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("poems.json"));
        storage.save(&[poem("a", 1)]).unwrap();
        assert_eq!(storage.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStorage::new(path).load().is_err());
    }
}
