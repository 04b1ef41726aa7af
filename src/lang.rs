pub mod data;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a language's purpose.
///
/// Only the first four variants are *recognized* categories. Source datasets
/// occasionally carry something else; that value is kept verbatim in
/// [`Category::Other`] so the record survives, but it never reaches the
/// category index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Programming,
    Data,
    Markup,
    Prose,
    Other(String),
}

impl Category {
    /// The recognized categories, in index order.
    pub const ALL: [Category; 4] = [
        Category::Programming,
        Category::Data,
        Category::Markup,
        Category::Prose,
    ];

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Programming => "programming",
            Category::Data => "data",
            Category::Markup => "markup",
            Category::Prose => "prose",
            Category::Other(s) => s,
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

// Exact match only: "Programming" is not "programming".
impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "programming" => Category::Programming,
            "data" => Category::Data,
            "markup" => Category::Markup,
            "prose" => Category::Prose,
            other => Category::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match Category::from(s.as_str()) {
            Category::Other(_) => Category::Other(s),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One language as stored in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub name: String,
    pub category: Category,
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl LanguageRecord {
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline(always)]
    pub fn category(&self) -> &Category {
        &self.category
    }
    #[inline(always)]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
    #[inline(always)]
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }
    #[inline(always)]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// The lookup key this record is stored under.
    #[inline]
    pub fn key(&self) -> String {
        language_key(&self.name)
    }
}

/// Lowercased display name used as the primary index key.
///
/// Plain Unicode lowercasing, no locale-specific folding.
#[inline]
pub fn language_key(name: &str) -> String {
    name.to_lowercase()
}
