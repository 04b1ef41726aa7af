//! The four derived structures.
//!
//! Each one is independently owned, serializable and loadable: a caller that
//! only resolves names needs nothing but a [`LanguageStore`]. None of them
//! exposes mutation outside the crate; refreshing data means building a new
//! set and swapping it in.

use crate::lang::{Category, LanguageRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Language keys claiming one identifier. Almost always one or two.
pub type KeyList = SmallVec<[String; 2]>;

/// Primary record store, keyed by lowercased display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageStore {
    records: IndexMap<String, LanguageRecord>,
}

impl LanguageStore {
    /// Exact key lookup. The caller lowercases.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&LanguageRecord> {
        self.records.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageRecord)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Returns the replaced record on key collision.
    pub(crate) fn insert(&mut self, key: String, record: LanguageRecord) -> Option<LanguageRecord> {
        self.records.insert(key, record)
    }
}

/// Identifier (extension with its dot, or exact filename) to claiming keys.
///
/// Identifiers are stored exactly as the source spells them; nothing is
/// case-folded here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReverseIndex {
    entries: IndexMap<String, KeyList>,
}

impl ReverseIndex {
    #[inline]
    pub fn get(&self, identifier: &str) -> Option<&[String]> {
        self.entries.get(identifier).map(SmallVec::as_slice)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(id, keys)| (id.as_str(), keys.as_slice()))
    }

    /// Identifiers claimed by more than one language.
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, keys)| keys.len() > 1)
    }

    /// Append `key` to the entry for `identifier`, once.
    pub(crate) fn claim(&mut self, identifier: &str, key: &str) {
        let keys = self.entries.entry(identifier.to_owned()).or_default();
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_owned());
        }
    }
}

/// Recognized category to display names, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIndex {
    entries: IndexMap<Category, Vec<String>>,
}

impl CategoryIndex {
    /// Display names in `category`; empty for anything unrecognized.
    #[inline]
    pub fn names(&self, category: &Category) -> &[String] {
        self.entries.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[String])> {
        self.entries.iter().map(|(c, n)| (c, n.as_slice()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `false` (and stores nothing) for unrecognized categories.
    pub(crate) fn push(&mut self, category: &Category, name: &str) -> bool {
        if !category.is_recognized() {
            return false;
        }
        self.entries
            .entry(category.clone())
            .or_default()
            .push(name.to_owned());
        true
    }
}

/// The full set of built structures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indices {
    pub languages: LanguageStore,
    pub extensions: ReverseIndex,
    pub filenames: ReverseIndex,
    pub categories: CategoryIndex,
}
