//! Word sources for passphrase generation.
//!
//! Words come either from a user-supplied file (UTF-8, one word per
//! line, blank lines ignored) or from a small embedded default list.
//! The embedded list is a convenience fallback, not a substitute for
//! a real Diceware list.

use std::path::Path;

/// The embedded default word list.
///
/// Small and memorable; used whenever no wordlist file is supplied
/// (or the supplied file turns out to contain no words).
const DEFAULT_WORDS: &[&str] = &[
    "sun", "moon", "star", "cloud", "rain", "wind", "river", "stone",
    "fire", "tree", "mountain", "field", "city", "door", "book", "road",
    "bridge", "clock", "key", "sky", "wolf", "bear", "eagle", "iron",
    "amber", "cedar", "harbor", "island", "lantern", "meadow", "north",
    "ocean", "pine", "quartz", "raven", "silver", "thunder", "valley",
    "willow", "ember",
];

/// An immutable, non-empty sequence of candidate words.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Returns the embedded default list.
    pub fn embedded() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Reads a wordlist file: one word per line, trimmed, blank lines
    /// ignored.
    ///
    /// An unreadable file is an error; a readable file with no words
    /// yields an empty list (see [`Wordlist::load`] for the fallback).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| WordlistError::ReadError(format!("{}: {}", path.display(), e)))?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Ok(Self { words })
    }

    /// Resolves the word source for a run.
    ///
    /// With a path, reads the file; if the file parses to zero words
    /// the embedded default is used instead and a warning is logged.
    /// Without a path, uses the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self, WordlistError> {
        match path {
            Some(p) => {
                let list = Self::from_file(p)?;
                if list.is_empty() {
                    tracing::warn!(
                        path = %p.display(),
                        "wordlist file contains no words, falling back to embedded default"
                    );
                    Ok(Self::embedded())
                } else {
                    Ok(list)
                }
            }
            None => Ok(Self::embedded()),
        }
    }

    /// Returns the words as a slice.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Wordlist loading errors.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("failed to read wordlist file: {0}")]
    ReadError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_list_non_empty() {
        let list = Wordlist::embedded();
        assert!(!list.is_empty());
        assert!(list.words().iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_from_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  beta  ").unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "gamma").unwrap();

        let list = Wordlist::from_file(file.path()).unwrap();
        assert_eq!(list.words(), &["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Wordlist::from_file("/nonexistent/wordlist.txt");
        assert!(matches!(result, Err(WordlistError::ReadError(_))));
    }

    #[test]
    fn test_load_empty_file_falls_back_to_embedded() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let list = Wordlist::load(Some(file.path())).unwrap();
        assert_eq!(list.len(), Wordlist::embedded().len());
    }

    #[test]
    fn test_load_without_path_uses_embedded() {
        let list = Wordlist::load(None).unwrap();
        assert_eq!(list.len(), Wordlist::embedded().len());
    }
}
