use std::collections::BTreeSet;

use super::DateValue;

/// A post after tag/category normalisation.
///
/// Always has at least one tag, at least one category and a date; the
/// aggregator refuses to build one otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// File name inside its language folder, e.g. `2024-01-01-hello.md`.
    pub name: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub date: DateValue,
    pub pin: Option<bool>,
    pub languniq: Option<bool>,
    pub math: Option<bool>,
}

impl PostRecord {
    /// `languniq` defaults to false when absent.
    pub fn is_language_unique(&self) -> bool {
        self.languniq.unwrap_or(false)
    }

    pub fn tag_set(&self) -> BTreeSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    pub fn category_set(&self) -> BTreeSet<&str> {
        self.categories.iter().map(String::as_str).collect()
    }
}
