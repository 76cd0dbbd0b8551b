//! JSON file helpers
//!
//! Reads tolerate a missing file where the caller has a sensible empty
//! value; writes go through a temp file and a rename so a crash never
//! leaves a half-written snapshot or settings file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SahlaError;

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, SahlaError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    parse_file(path)
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, SahlaError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(SahlaError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    parse_file(path)
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, SahlaError> {
    let file = File::open(path)
        .map_err(|e| SahlaError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SahlaError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write pretty JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SahlaError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SahlaError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SahlaError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SahlaError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SahlaError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SahlaError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SahlaError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoal};
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        let goals: Vec<SavingsGoal> = read_json(&path).unwrap();
        assert!(goals.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let goals = vec![SavingsGoal::new("Mouton de l'Aïd", Money::from_units(4000))];

        write_json_atomic(&path, &goals).unwrap();
        let loaded: Vec<SavingsGoal> = read_json(&path).unwrap();
        assert_eq!(loaded, goals);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        write_json_atomic(&path, &Vec::<SavingsGoal>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("goals.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("goals.json");

        write_json_atomic(&path, &Vec::<SavingsGoal>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_required_and_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        assert!(matches!(
            read_json_required::<Vec<SavingsGoal>, _>(&path),
            Err(SahlaError::Storage(_))
        ));

        fs::write(&path, "not json at all").unwrap();
        assert!(read_json::<Vec<SavingsGoal>, _>(&path).is_err());
    }
}
