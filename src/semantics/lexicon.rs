// src/semantics/lexicon.rs

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::semantics::SemanticsError;

/// Word to category lookup built from `word:category` files
#[derive(Debug, Default)]
pub struct Lexicon {
    words: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.txt` file in `dir`, in file name order. The first file
    /// to mention a word decides its category.
    pub fn load_dir(dir: &Path) -> Result<Self, SemanticsError> {
        let read_err = |source| SemanticsError::Read {
            path: dir.to_path_buf(),
            source,
        };
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(read_err)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        files.sort();

        let mut lexicon = Self::new();
        for file in &files {
            let content = fs::read_to_string(file).map_err(|source| SemanticsError::Read {
                path: file.clone(),
                source,
            })?;
            let mut malformed = 0;
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let parts: Vec<&str> = line.split(':').collect();
                if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
                    lexicon.insert(parts[0], &parts[1].to_lowercase());
                } else {
                    malformed += 1;
                }
            }
            if malformed > 0 {
                warn!("Skipped {} malformed lines in {}", malformed, file.display());
            }
            debug!("Loaded {}", file.display());
        }

        info!(
            "Lexicon loaded {} words from {} files in {}",
            lexicon.len(),
            files.len(),
            dir.display()
        );
        Ok(lexicon)
    }

    /// Adds a word unless it already has a category
    pub fn insert(&mut self, word: &str, category: &str) {
        self.words
            .entry(word.to_string())
            .or_insert_with(|| category.to_string());
    }

    /// Category of `word`: exact match, then lower case, then a naive
    /// singular of the lower-case form
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if let Some(category) = self.words.get(word) {
            return Some(category.as_str());
        }
        let lower = word.to_lowercase();
        if let Some(category) = self.words.get(&lower) {
            return Some(category.as_str());
        }
        singular(&lower).and_then(|s| self.words.get(&s).map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// "ponies" -> "pony", "boxes" -> "box", "dogs" -> "dog"
fn singular(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return Some(format!("{}y", stem));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["s", "x", "z", "ch", "sh"].iter().any(|s| stem.ends_with(s)) {
            return Some(stem.to_string());
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() && !stem.ends_with('s') => Some(stem.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use uuid::Uuid;

    #[test]
    fn test_singular() {
        assert_eq!(singular("ponies").as_deref(), Some("pony"));
        assert_eq!(singular("boxes").as_deref(), Some("box"));
        assert_eq!(singular("churches").as_deref(), Some("church"));
        assert_eq!(singular("dogs").as_deref(), Some("dog"));
        assert_eq!(singular("glass"), None);
        assert_eq!(singular("s"), None);
    }

    #[test]
    fn test_lookup_order() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("Wellington", "location");
        lexicon.insert("boat", "vehicle");
        lexicon.insert("pony", "animal");

        assert_eq!(lexicon.lookup("Wellington"), Some("location"));
        assert_eq!(lexicon.lookup("Boat"), Some("vehicle"));
        assert_eq!(lexicon.lookup("boats"), Some("vehicle"));
        assert_eq!(lexicon.lookup("Ponies"), Some("animal"));
        assert_eq!(lexicon.lookup("harbour"), None);
    }

    #[test]
    fn test_first_category_wins() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("jaguar", "animal");
        lexicon.insert("jaguar", "vehicle");
        assert_eq!(lexicon.lookup("jaguar"), Some("animal"));
    }

    #[test]
    fn test_load_dir() {
        let dir = env::temp_dir().join(format!("lexicon-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("animal.txt"), "dog:animal\nwolf:ANIMAL\nbroken line\n").unwrap();
        fs::write(dir.join("vehicle.txt"), "boat:vehicle\n\n").unwrap();
        fs::write(dir.join("notes.md"), "cat:animal\n").unwrap();

        let lexicon = Lexicon::load_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lookup("wolf"), Some("animal"));
        assert_eq!(lexicon.lookup("boat"), Some("vehicle"));
        assert_eq!(lexicon.lookup("cat"), None);
    }

    #[test]
    fn test_missing_dir() {
        let dir = env::temp_dir().join(format!("lexicon-missing-{}", Uuid::new_v4()));
        assert!(matches!(
            Lexicon::load_dir(&dir),
            Err(SemanticsError::Read { .. })
        ));
    }
}
