//! Post-build consistency checks.
//!
//! The builder never produces a failing set on its own; these checks matter
//! for indices loaded from artifacts that may have been edited or assembled
//! from different builds.

use crate::index::Indices;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("{index} entry `{identifier}` points at unknown language key `{key}`")]
    DanglingKey {
        index: &'static str,
        identifier: String,
        key: String,
    },
    #[error("language `{key}` declares extension `{extension}` without a leading dot")]
    ExtensionWithoutDot { key: String, extension: String },
    #[error("category index lists `{name}` under `{listed}` but its record says `{actual}`")]
    CategoryMismatch {
        name: String,
        listed: String,
        actual: String,
    },
    #[error("category index lists unknown language `{name}`")]
    UnknownName { name: String },
}

/// Collect every violation instead of stopping at the first one.
pub fn validate(indices: &Indices) -> Result<(), Vec<IntegrityError>> {
    let mut errors = Vec::new();
    let store = &indices.languages;

    for (index, reverse) in [("extension", &indices.extensions), ("filename", &indices.filenames)] {
        for (identifier, keys) in reverse.iter() {
            for key in keys.iter().filter(|k| !store.contains_key(k)) {
                errors.push(IntegrityError::DanglingKey {
                    index,
                    identifier: identifier.to_owned(),
                    key: key.clone(),
                });
            }
        }
    }

    for (key, record) in store.iter() {
        for ext in record.extensions().iter().filter(|e| !e.starts_with('.')) {
            errors.push(IntegrityError::ExtensionWithoutDot {
                key: key.to_owned(),
                extension: ext.clone(),
            });
        }
    }

    for (category, names) in indices.categories.iter() {
        for name in names {
            match store.get(&crate::lang::language_key(name)) {
                None => errors.push(IntegrityError::UnknownName { name: name.clone() }),
                Some(record) if &record.category != category => {
                    errors.push(IntegrityError::CategoryMismatch {
                        name: name.clone(),
                        listed: category.to_string(),
                        actual: record.category.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
