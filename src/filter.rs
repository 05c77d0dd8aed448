use crate::decoder::fold_case;
use crate::error::{FreqError, FreqResult};
use crate::script::is_letter;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Stopwords plus extra excluded words, matched against whole tokens.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One token per line. Blank lines and `#` comments are skipped, entries
    /// are trimmed and lower-cased.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut set = Self::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            set.words.insert(fold_case(line));
        }
        Ok(set)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FreqResult<Self> {
        let path = path.as_ref();
        let wrap = |source| FreqError::ExclusionLoad {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(wrap)?;
        let set = Self::from_reader(BufReader::new(file)).map_err(wrap)?;
        debug!("Loaded {} exclusion entries from {}", set.len(), path.display());
        Ok(set)
    }

    /// Unions every listed file. Any unreadable file fails the whole load.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> FreqResult<Self> {
        let mut set = Self::new();
        for p in paths {
            set.extend(Self::load_from_file(p)?);
        }
        Ok(set)
    }

    pub fn extend(&mut self, other: ExclusionSet) {
        self.words.extend(other.words);
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(fold_case(word));
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        for w in iter {
            set.insert(w.as_ref());
        }
        set
    }
}

/// Gatekeeper between the tokenizer and the tables.
///
/// Order matters: non-letters are stripped first, an empty result stops
/// there, then the length threshold, then exclusion lookup on the cleaned
/// token.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    pub min_len: usize,
    pub exclusions: ExclusionSet,
}

impl TokenFilter {
    pub fn new(min_len: usize, exclusions: ExclusionSet) -> Self {
        Self {
            min_len,
            exclusions,
        }
    }

    pub fn accept(&self, raw: &[char]) -> Option<String> {
        let cleaned: String = raw.iter().copied().filter(|c| is_letter(*c)).collect();
        if cleaned.is_empty() {
            return None;
        }
        if cleaned.chars().count() < self.min_len {
            return None;
        }
        if self.exclusions.contains(&cleaned) {
            return None;
        }
        Some(cleaned)
    }
}
