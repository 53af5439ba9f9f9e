//! Synonym table used to canonicalize categories and comments

use std::collections::HashMap;

/// Maps alias words to the canonical word of their synonym group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    canonical: HashMap<String, String>,
}

impl SynonymTable {
    /// Create an empty table; normalization through it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from synonym-group text.
    ///
    /// Each non-blank line is a group of whitespace-separated words, and every
    /// word maps to the first word of its line. A word listed on several lines
    /// takes the mapping from the last of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use timelog::domain::SynonymTable;
    ///
    /// let table = SynonymTable::parse("work job office\n");
    /// assert_eq!(table.normalize("office"), "work");
    /// assert_eq!(table.normalize("sleep"), "sleep");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut canonical = HashMap::new();

        for line in text.lines() {
            let words: Vec<&str> = line.split_whitespace().collect();
            let Some(first) = words.first() else {
                continue;
            };
            for word in &words {
                canonical.insert(word.to_string(), first.to_string());
            }
        }

        tracing::debug!(words = canonical.len(), "synonym table loaded");
        SynonymTable { canonical }
    }

    /// Return the canonical form of `word`, or `word` itself if it has none.
    pub fn normalize<'a>(&'a self, word: &'a str) -> &'a str {
        self.canonical.get(word).map(String::as_str).unwrap_or(word)
    }

    /// Canonical form of `word`, if the table knows it.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.canonical.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
