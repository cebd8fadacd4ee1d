use std::collections::hash_set;
use std::collections::HashSet;

/// Set of known public suffixes (`com`, `co.uk`, `act.edu.au`, ...)
///
/// Entries are never empty and never start with `/`. Lookups use exact,
/// case-sensitive string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixSet {
    suffixes: HashSet<String>,
}

impl SuffixSet {
    /// Create an empty suffix set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the raw public suffix list.
    ///
    /// Keeps every non-empty line whose first character is not `/`. With
    /// `max_depth`, lines containing `max_depth` or more dots are dropped too.
    pub fn clean(raw: &str, max_depth: Option<usize>) -> Self {
        let mut set = Self::new();
        for line in raw.lines() {
            if let Some(depth) = max_depth {
                if line.matches('.').count() >= depth {
                    continue;
                }
            }
            set.insert(line);
        }
        set
    }

    /// Build a set from cache file content: every non-empty line, verbatim
    pub fn from_cache_text(text: &str) -> Self {
        let suffixes = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { suffixes }
    }

    /// Render the cache file content: one suffix per line, newline-terminated
    pub fn to_cache_text(&self) -> String {
        let mut sorted: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        let mut text = String::with_capacity(self.suffixes.iter().map(|s| s.len() + 1).sum());
        for suffix in sorted {
            text.push_str(suffix);
            text.push('\n');
        }
        text
    }

    /// Add a suffix. Empty and comment (`/`-prefixed) entries are rejected.
    pub fn insert(&mut self, suffix: impl Into<String>) -> bool {
        let suffix = suffix.into();
        if suffix.is_empty() || suffix.starts_with('/') {
            return false;
        }
        self.suffixes.insert(suffix)
    }

    /// Check whether `suffix` is a known public suffix
    pub fn contains(&self, suffix: &str) -> bool {
        self.suffixes.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.suffixes.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for suffix in iter {
            set.insert(suffix);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SuffixSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
