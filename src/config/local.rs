use crate::core::Storage;
use crate::utils::error::{CatalogError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads descriptors straight from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        // fs::read opens and closes the handle inside the call.
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => CatalogError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.gradle");
        fs::write(&path, "plugins {}").unwrap();

        let data = LocalStorage::new().read_file(&path).unwrap();
        assert_eq!(data, b"plugins {}");
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.gradle");

        match LocalStorage::new().read_file(&path) {
            Err(CatalogError::FileNotFound { path: reported }) => {
                assert!(reported.ends_with("nope.gradle"))
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = LocalStorage::new().read_file(temp_dir.path());
        assert!(matches!(result, Err(CatalogError::ReadError { .. })));
    }
}
