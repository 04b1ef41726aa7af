//! Raw dataset shape handed over by the dataset provider.
//!
//! A dataset is an *ordered* mapping from original-case language name to its
//! definition. Order matters: it is the order ambiguous lookups report, so the
//! JSON object is deserialized into an [`IndexMap`] and never re-sorted.

use crate::lang::{Category, data::BUNDLED_LANGUAGES};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Definition record for a single language, as published by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDef {
    #[serde(alias = "type")]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filenames: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl LanguageDef {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
            extensions: None,
            filenames: None,
            group: None,
        }
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn filenames<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filenames = Some(filenames.into_iter().map(Into::into).collect());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Ordered `name -> definition` mapping.
///
/// Unlike a JSON object parsed into a hash map, pushing or parsing the same
/// name twice keeps the *first* position and the *last* definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDataset {
    entries: IndexMap<String, LanguageDef>,
}

impl RawDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn push(&mut self, name: impl Into<String>, def: LanguageDef) {
        self.entries.insert(name.into(), def);
    }

    pub fn with(mut self, name: impl Into<String>, def: LanguageDef) -> Self {
        self.push(name, def);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageDef> {
        self.entries.get(name)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageDef)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

impl<N: Into<String>> FromIterator<(N, LanguageDef)> for RawDataset {
    fn from_iter<T: IntoIterator<Item = (N, LanguageDef)>>(iter: T) -> Self {
        let mut dataset = RawDataset::new();
        for (name, def) in iter {
            dataset.push(name, def);
        }
        dataset
    }
}

/// Anything that can hand over a parsed dataset.
///
/// Network transport is deliberately not modelled here; a caller that fetches
/// the dataset remotely parses it with [`RawDataset::from_json_str`].
pub trait DatasetSource {
    fn load(&self) -> Result<RawDataset, DatasetError>;
}

impl DatasetSource for RawDataset {
    fn load(&self) -> Result<RawDataset, DatasetError> {
        Ok(self.clone())
    }
}

/// A dataset stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

impl DatasetSource for JsonFile {
    fn load(&self) -> Result<RawDataset, DatasetError> {
        let file = File::open(&self.0).map_err(|source| DatasetError::Io {
            path: self.0.clone(),
            source,
        })?;
        RawDataset::from_reader(BufReader::new(file))
    }
}

/// The snapshot compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl DatasetSource for Bundled {
    fn load(&self) -> Result<RawDataset, DatasetError> {
        Ok(bundled_dataset())
    }
}

pub fn bundled_dataset() -> RawDataset {
    BUNDLED_LANGUAGES
        .iter()
        .map(|lang| {
            let mut def = LanguageDef::new(lang.category);
            if !lang.extensions.is_empty() {
                def = def.extensions(lang.extensions.iter().copied());
            }
            if !lang.filenames.is_empty() {
                def = def.filenames(lang.filenames.iter().copied());
            }
            if let Some(group) = lang.group {
                def = def.group(group);
            }
            (lang.name, def)
        })
        .collect()
}
