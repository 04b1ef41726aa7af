use crate::{
    dataset::{LanguageDef, RawDataset},
    index::Indices,
    lang::{LanguageRecord, language_key},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("language `{incoming}` collides with `{existing}` on key `{key}`")]
    KeyCollision {
        key: String,
        existing: String,
        incoming: String,
    },
}

/// What to do when two distinct display names lowercase to the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later record replaces the earlier one; the loss is logged and reported.
    #[default]
    LastWriteWins,
    /// Abort the build with [`BuildError::KeyCollision`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub collision_policy: CollisionPolicy,
}

/// A record lost to last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub replaced: String,
    pub kept: String,
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub languages: usize,
    pub extensions: usize,
    pub filenames: usize,
    pub key_collisions: Vec<KeyCollision>,
    /// Display names whose category was not recognized.
    pub dropped_categories: Vec<String>,
}

/// Turns `(name, definition)` pairs into [`Indices`].
///
/// Feed entries in source order; that order is what every reverse-index entry
/// and category list preserves.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    options: BuildOptions,
    indices: Indices,
    report: BuildReport,
    error: Option<BuildError>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.options.collision_policy = policy;
        self
    }

    pub fn insert(&mut self, name: &str, def: &LanguageDef) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let key = language_key(name);

        if let Some(existing) = self.indices.languages.get(&key)
            && existing.name != name
        {
            match self.options.collision_policy {
                CollisionPolicy::Reject => {
                    self.error = Some(BuildError::KeyCollision {
                        key,
                        existing: existing.name.clone(),
                        incoming: name.to_owned(),
                    });
                    return self;
                }
                CollisionPolicy::LastWriteWins => {
                    warn!(
                        key = %key,
                        replaced = %existing.name,
                        kept = %name,
                        "language key collision, later record wins"
                    );
                    self.report.key_collisions.push(KeyCollision {
                        key: key.clone(),
                        replaced: existing.name.clone(),
                        kept: name.to_owned(),
                    });
                }
            }
        }

        let extensions = def.extensions.clone().unwrap_or_default();
        let filenames = def.filenames.clone().unwrap_or_default();

        for ext in &extensions {
            self.indices.extensions.claim(ext, &key);
        }
        for file in &filenames {
            self.indices.filenames.claim(file, &key);
        }
        if !self.indices.categories.push(&def.category, name) {
            self.report.dropped_categories.push(name.to_owned());
        }

        self.indices.languages.insert(
            key,
            LanguageRecord {
                name: name.to_owned(),
                category: def.category.clone(),
                extensions,
                filenames,
                group: def.group.clone(),
            },
        );
        self
    }

    pub fn extend(&mut self, dataset: &RawDataset) -> &mut Self {
        for (name, def) in dataset.iter() {
            self.insert(name, def);
        }
        self
    }

    pub fn finish(self) -> Result<(Indices, BuildReport), BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let mut report = self.report;
        report.languages = self.indices.languages.len();
        report.extensions = self.indices.extensions.len();
        report.filenames = self.indices.filenames.len();
        debug!(
            languages = report.languages,
            extensions = report.extensions,
            filenames = report.filenames,
            collisions = report.key_collisions.len(),
            "indices built"
        );
        Ok((self.indices, report))
    }
}

/// Build with the default last-write-wins policy.
pub fn build_indices(dataset: &RawDataset) -> Indices {
    let mut builder = IndexBuilder::new();
    builder.extend(dataset);
    // LastWriteWins never records an error.
    builder
        .finish()
        .map(|(indices, _)| indices)
        .unwrap_or_default()
}

pub fn build_with_options(
    dataset: &RawDataset,
    options: BuildOptions,
) -> Result<(Indices, BuildReport), BuildError> {
    let mut builder = IndexBuilder::with_options(options);
    builder.extend(dataset);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Category;

    fn sample() -> RawDataset {
        RawDataset::new()
            .with(
                "C",
                LanguageDef::new("programming").extensions([".c", ".h"]),
            )
            .with(
                "Objective-C",
                LanguageDef::new("programming").extensions([".m", ".h"]),
            )
            .with(
                "Dockerfile",
                LanguageDef::new("programming")
                    .extensions([".dockerfile"])
                    .filenames(["Dockerfile"]),
            )
            .with("Alien", LanguageDef::new("aliens").extensions([".et"]))
    }

    #[test]
    fn records_are_keyed_by_lowercase_name() {
        let idx = build_indices(&sample());
        let rec = idx.languages.get("objective-c").unwrap();
        assert_eq!(rec.name, "Objective-C");
        assert_eq!(rec.extensions, [".m", ".h"]);
        assert!(rec.filenames.is_empty());
        assert_eq!(rec.group, None);
        assert!(idx.languages.get("Objective-C").is_none());
    }

    #[test]
    fn reverse_entries_follow_source_order() {
        let idx = build_indices(&sample());
        assert_eq!(idx.extensions.get(".h").unwrap(), ["c", "objective-c"]);
        assert_eq!(idx.filenames.get("Dockerfile").unwrap(), ["dockerfile"]);
    }

    #[test]
    fn unrecognized_category_kept_in_store_only() {
        let mut builder = IndexBuilder::new();
        builder.extend(&sample());
        let (idx, report) = builder.finish().unwrap();
        assert_eq!(
            idx.languages.get("alien").unwrap().category,
            Category::Other("aliens".into())
        );
        assert!(idx.categories.iter().all(|(_, names)| !names.contains(&"Alien".to_string())));
        assert_eq!(report.dropped_categories, ["Alien"]);
        assert_eq!(report.languages, 4);
    }

    #[test]
    fn collision_last_write_wins_and_is_reported() {
        let ds = RawDataset::new()
            .with("Foo", LanguageDef::new("data").extensions([".a"]))
            .with("FOO", LanguageDef::new("prose").extensions([".b"]));
        let mut builder = IndexBuilder::new();
        builder.extend(&ds);
        let (idx, report) = builder.finish().unwrap();

        assert_eq!(idx.languages.len(), 1);
        assert_eq!(idx.languages.get("foo").unwrap().name, "FOO");
        // Both extensions point at the surviving key.
        assert_eq!(idx.extensions.get(".a").unwrap(), ["foo"]);
        assert_eq!(idx.extensions.get(".b").unwrap(), ["foo"]);
        assert_eq!(
            report.key_collisions,
            [KeyCollision {
                key: "foo".into(),
                replaced: "Foo".into(),
                kept: "FOO".into(),
            }]
        );
    }

    #[test]
    fn collision_rejected_in_strict_mode() {
        let ds = RawDataset::new()
            .with("Foo", LanguageDef::new("data"))
            .with("FOO", LanguageDef::new("data"));
        let err = build_with_options(
            &ds,
            BuildOptions {
                collision_policy: CollisionPolicy::Reject,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::KeyCollision {
                key: "foo".into(),
                existing: "Foo".into(),
                incoming: "FOO".into(),
            }
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: BuildOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.collision_policy, CollisionPolicy::LastWriteWins);
        let opts: BuildOptions =
            serde_json::from_str(r#"{"collision_policy":"reject"}"#).unwrap();
        assert_eq!(opts.collision_policy, CollisionPolicy::Reject);
    }
}
