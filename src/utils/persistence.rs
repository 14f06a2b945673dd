//! JSON persistence for the tagbook data directory.
//!
//! Collections are stored whole: a load hands back the full collection, a
//! save writes the full collection. Each file is wrapped in a small envelope
//! carrying the format version and the save time.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{DATA_DIR_ENV, DATA_DIR_NAME, SAVE_FORMAT_VERSION};

/// Get the data directory (`$TAGBOOK_HOME` or `~/.tagbook/`), creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home_dir = dirs::home_dir().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine home directory",
                )
            })?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Whole-collection load/save for one concrete collection type.
pub trait Store<T> {
    fn load(&self) -> io::Result<T>;
    fn save(&self, records: &T) -> io::Result<()>;
    fn exists(&self) -> bool;
}

#[derive(Serialize, Deserialize)]
struct SaveFile<T> {
    version: u32,
    saved_at: i64,
    records: T,
}

/// A [`Store`] backed by a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for JsonStore<T> {
    fn load(&self) -> io::Result<T> {
        let json = fs::read_to_string(&self.path)?;
        let file: SaveFile<T> = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if file.version != SAVE_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported save version: expected {}, got {}",
                    SAVE_FORMAT_VERSION, file.version
                ),
            ));
        }

        Ok(file.records)
    }

    fn save(&self, records: &T) -> io::Result<()> {
        let file = SaveFile {
            version: SAVE_FORMAT_VERSION,
            saved_at: Utc::now().timestamp(),
            records,
        };
        save_json(&self.path, &file)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let val: Vec<String> = load_json_or_default(&dir.path().join("nonexistent.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_invalid_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let val: Vec<String> = load_json_or_default(&path);
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Vec<String>>::new(dir.path().join("names.json"));
        assert!(!store.exists());

        let data = vec!["hello".to_string(), "world".to_string()];
        store.save(&data).expect("save should succeed");
        assert!(store.exists());

        let loaded = store.load().expect("load should succeed");
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Vec<u32>>::new(dir.path().join("nested").join("deeper.json"));
        store.save(&vec![1, 2, 3]).unwrap();
        assert_eq!(store.load().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::<Vec<String>>::new(dir.path().join("missing.json"));
        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_rejects_other_versions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");
        fs::write(&path, r#"{"version": 99, "saved_at": 0, "records": []}"#).unwrap();

        let store = JsonStore::<Vec<String>>::new(&path);
        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_rejects_bare_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.json");
        fs::write(&path, r#"["a", "b"]"#).unwrap();

        let store = JsonStore::<Vec<String>>::new(&path);
        assert_eq!(store.load().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
