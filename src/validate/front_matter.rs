//! Front matter extraction and parsing.
//!
//! The model is instructed to open every article with a YAML front matter
//! block, but its output is not trusted: the block is parsed line by line
//! as naive `key: value` pairs (split on the first colon, surrounding quote
//! characters stripped) rather than through a YAML parser. Malformed lines
//! and duplicate keys become parse warnings, never errors.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a front matter block delimited by `---` lines at the very start
/// of the text.
static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*(.*?)\s*---").expect("invalid front matter regex"));

/// An ordered key/value mapping parsed from a front matter block.
///
/// Keys are unique and kept in first-seen order; a duplicate key keeps the
/// first value (the duplicate is reported as a warning by the parser).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, String)>,
}

impl FrontMatter {
    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the mapping contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert_first_wins(&mut self, key: String, value: String) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value));
        true
    }
}

/// Locate the leading front matter block and return its inner content.
///
/// Returns `None` when the text does not start with a `---`-delimited
/// block; the caller records that as a missing-block issue.
pub fn extract_block(text: &str) -> Option<&str> {
    FRONT_MATTER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the inner content of a front matter block.
///
/// Each line is split on its first colon; keys and values are trimmed and
/// values lose surrounding quote characters. Returns the mapping plus a
/// list of parse warnings (lines without a colon, duplicate keys). Empty
/// lines are skipped silently.
pub fn parse_block(block: &str) -> (FrontMatter, Vec<String>) {
    let mut front_matter = FrontMatter::default();
    let mut warnings = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            warnings.push(format!(
                "Front matter line without ':' ignored: '{}'.",
                line
            ));
            continue;
        };

        let key = key.trim().to_string();
        let value = strip_quotes(value.trim()).to_string();

        if !front_matter.insert_first_wins(key.clone(), value) {
            warnings.push(format!(
                "Duplicate front matter key '{}' ignored (first value kept).",
                key
            ));
        }
    }

    (front_matter, warnings)
}

/// Strip surrounding quote characters from a value.
fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}
