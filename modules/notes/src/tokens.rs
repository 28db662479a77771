//! Token allow-list backed by a flat file (one token per line).
//!
//! The file is re-read on every check so edits apply to the next request.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current set of tokens. A missing file is an empty set.
    pub fn load(&self) -> io::Result<HashSet<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Whether `token` is listed. Read failures other than a missing file are errors.
    pub fn is_valid(&self, token: &str) -> io::Result<bool> {
        Ok(self.load()?.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_rejects_everything() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("tokens.txt"));
        assert!(store.load().unwrap().is_empty());
        assert!(!store.is_valid("abc123").unwrap());
        assert!(!store.is_valid("").unwrap());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.txt");
        fs::write(&path, "abc123\n  spaced  \r\n\nlast").unwrap();

        let store = TokenStore::new(&path);
        assert!(store.is_valid("abc123").unwrap());
        assert!(store.is_valid("spaced").unwrap());
        assert!(store.is_valid("last").unwrap());
        assert!(!store.is_valid("  spaced  ").unwrap());
        assert!(!store.is_valid("").unwrap());
    }

    #[test]
    fn test_edits_apply_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.txt");
        fs::write(&path, "old\n").unwrap();

        let store = TokenStore::new(&path);
        assert!(store.is_valid("old").unwrap());

        fs::write(&path, "new\n").unwrap();
        assert!(!store.is_valid("old").unwrap());
        assert!(store.is_valid("new").unwrap());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tokens.txt");
        fs::create_dir(&path).unwrap();

        let store = TokenStore::new(&path);
        assert!(store.load().is_err());
        assert!(store.is_valid("abc123").is_err());
    }
}
