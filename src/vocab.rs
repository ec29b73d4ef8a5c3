use std::{fs, io, path::Path};

/// The candidate word list. Loaded once, deduplicated and sorted, and
/// read-only for the lifetime of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new(words: impl IntoIterator<Item = String>) -> Vocabulary {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort();
        words.dedup();
        Vocabulary { words }
    }

    /// Reads a word list from a file, one word per line. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Vocabulary> {
        let contents = fs::read_to_string(path)?;
        Ok(Vocabulary::new(contents.lines().map(str::to_owned)))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
