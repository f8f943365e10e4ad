//! Dictionary of known-weak passwords.
//!
//! Built once at startup, immutable afterwards, and freely shareable across
//! concurrent evaluations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimal built-in list, always present regardless of any external file.
const BUILTIN: [&str; 6] = [
    "password", "123456", "qwerty", "letmein", "admin", "12345678",
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// An immutable, case-folded set of known-weak passwords.
///
/// The only operation the evaluator needs is [`contains`](Dictionary::contains);
/// everything else is construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary holding only the built-in list.
    pub fn builtin() -> Self {
        Dictionary {
            entries: BUILTIN.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Builds the built-in list merged with lines from an external file.
    ///
    /// A missing or unreadable file is not an error: the dictionary is a
    /// defense-in-depth supplement, so construction falls back to the
    /// built-in list alone.
    pub fn with_supplement<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_with_supplement(&path) {
            Ok(dict) => dict,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Dictionary supplement {:?} unavailable ({}), using built-in list",
                    path.as_ref(),
                    _e
                );
                Self::builtin()
            }
        }
    }

    /// Strict variant of [`with_supplement`](Dictionary::with_supplement) for
    /// callers that want to surface a bad supplement file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// contains no entries.
    pub fn try_with_supplement<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Err(DictionaryError::EmptyFile);
        }

        let mut dict = Self::builtin();
        dict.entries.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Dictionary initialized: {} entries including {:?}",
            dict.entries.len(),
            path
        );

        Ok(dict)
    }

    /// Builds a dictionary from the conventional supplement location.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_DICTIONARY_PATH`
    /// 2. Default path `./assets/common-passwords.txt`
    ///
    /// Absence of the file at either location is absorbed.
    pub fn from_env() -> Self {
        Self::with_supplement(Self::default_path())
    }

    /// Returns the supplement file path honoring `PWD_DICTIONARY_PATH`.
    pub fn default_path() -> PathBuf {
        std::env::var("PWD_DICTIONARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_entries_present() {
        let dict = Dictionary::builtin();
        assert!(dict.contains("password"));
        assert!(dict.contains("letmein"));
        assert!(dict.contains("12345678"));
        assert_eq!(dict.len(), 6);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::builtin();
        assert!(dict.contains("PASSWORD"));
        assert!(dict.contains("QwErTy"));
        assert!(!dict.contains("correcthorsebatterystaple"));
    }

    #[test]
    fn test_supplement_merges_with_builtin() {
        let temp_file = setup_with_tempfile(&["hunter2", "  Trustno1  ", ""]);
        let dict = Dictionary::with_supplement(temp_file.path());

        assert!(dict.contains("hunter2"));
        assert!(dict.contains("trustno1")); // trimmed and case-folded
        assert!(dict.contains("password")); // builtin survives the merge
        assert_eq!(dict.len(), 8);
    }

    #[test]
    fn test_missing_supplement_is_absorbed() {
        let dict = Dictionary::with_supplement("/nonexistent/path/common.txt");
        assert_eq!(dict.len(), 6);
        assert!(dict.contains("password"));
    }

    #[test]
    fn test_try_with_supplement_file_not_found() {
        let result = Dictionary::try_with_supplement("/nonexistent/path/common.txt");
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));
    }

    #[test]
    fn test_try_with_supplement_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Dictionary::try_with_supplement(temp_file.path());
        assert!(matches!(result, Err(DictionaryError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_default_path_default() {
        remove_env("PWD_DICTIONARY_PATH");

        let path = Dictionary::default_path();
        assert_eq!(path, PathBuf::from("./assets/common-passwords.txt"));
    }

    #[test]
    #[serial]
    fn test_default_path_from_env() {
        let custom_path = "/custom/path/common.txt";
        set_env("PWD_DICTIONARY_PATH", custom_path);

        let path = Dictionary::default_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_DICTIONARY_PATH");
    }

    #[test]
    #[serial]
    fn test_from_env_with_supplement_file() {
        let temp_file = setup_with_tempfile(&["monkey", "dragon"]);
        set_env("PWD_DICTIONARY_PATH", temp_file.path().to_str().unwrap());

        let dict = Dictionary::from_env();
        assert!(dict.contains("monkey"));
        assert!(dict.contains("DRAGON"));

        remove_env("PWD_DICTIONARY_PATH");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file_falls_back() {
        set_env("PWD_DICTIONARY_PATH", "/nonexistent/path/common.txt");

        let dict = Dictionary::from_env();
        assert_eq!(dict.len(), 6);

        remove_env("PWD_DICTIONARY_PATH");
    }
}
