use crate::{
    builder::build_indices,
    dataset::bundled_dataset,
    index::{CategoryIndex, Indices, LanguageStore, ReverseIndex},
    lang::{Category, LanguageRecord, language_key},
    path,
};
use std::sync::LazyLock;
use tracing::trace;

/// Read-only query surface over a set of indices.
///
/// A resolver owns its indices and never mutates them. To pick up a new
/// dataset, build a new resolver and swap it in (an `Arc<Resolver>` behind
/// whatever cell the caller already uses).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolver {
    indices: Indices,
}

impl Resolver {
    pub fn new(indices: Indices) -> Self {
        Self { indices }
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    #[inline]
    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    pub fn into_indices(self) -> Indices {
        self.indices
    }

    /// Case-insensitive exact lookup by display name.
    pub fn get_language(&self, name: &str) -> Option<&LanguageRecord> {
        if name.is_empty() {
            return None;
        }
        self.indices.languages.get(&language_key(name))
    }

    /// Every record in `category`, in dataset order.
    ///
    /// Unknown categories yield an empty list, never `None`: the category
    /// exists conceptually, it just has no members.
    pub fn get_languages_by_type(&self, category: &str) -> Vec<&LanguageRecord> {
        self.languages_in(&Category::from(category))
    }

    pub fn languages_in(&self, category: &Category) -> Vec<&LanguageRecord> {
        self.indices
            .categories
            .names(category)
            .iter()
            .filter_map(|name| self.get_language(name))
            // A key collision can leave a stale name pointing at a record of
            // another category.
            .filter(|record| &record.category == category)
            .collect()
    }

    /// Display names of every language claiming `path`.
    ///
    /// An exact filename match wins over the extension. With a
    /// `category_filter`, only records in that category survive. `None`
    /// means nothing matched; `Some` is never empty.
    pub fn get_language_by_file_name(
        &self,
        path: &str,
        category_filter: Option<&str>,
    ) -> Option<Vec<&str>> {
        let base = path::basename(path);
        let candidates = self.candidates(base)?;

        let names: Vec<&str> = candidates
            .iter()
            .filter_map(|key| self.indices.languages.get(key))
            .filter(|record| category_filter.is_none_or(|c| record.category.as_str() == c))
            .map(LanguageRecord::name)
            .collect();

        trace!(path, basename = base, matches = names.len(), "resolved path");
        (!names.is_empty()).then_some(names)
    }

    /// Parent record named by `name`'s group, if both exist.
    pub fn get_group(&self, name: &str) -> Option<&LanguageRecord> {
        self.get_language(name)?
            .group()
            .and_then(|group| self.get_language(group))
    }

    fn candidates(&self, base: &str) -> Option<&[String]> {
        if let Some(keys) = self.indices.filenames.get(base) {
            return Some(keys);
        }
        let ext = path::extension(base)?;
        self.indices.extensions.get(ext)
    }
}

/// Assemble a resolver from independently loaded indices.
///
/// Any index left out is empty, so a name-only resolver carries nothing
/// but the record store.
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    indices: Indices,
}

impl ResolverBuilder {
    pub fn languages(mut self, languages: LanguageStore) -> Self {
        self.indices.languages = languages;
        self
    }

    pub fn extensions(mut self, extensions: ReverseIndex) -> Self {
        self.indices.extensions = extensions;
        self
    }

    pub fn filenames(mut self, filenames: ReverseIndex) -> Self {
        self.indices.filenames = filenames;
        self
    }

    pub fn categories(mut self, categories: CategoryIndex) -> Self {
        self.indices.categories = categories;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver::new(self.indices)
    }
}

static BUNDLED: LazyLock<Resolver> = LazyLock::new(|| Resolver::new(build_indices(&bundled_dataset())));

/// Process-wide resolver over the bundled snapshot, built on first use.
pub fn bundled() -> &'static Resolver {
    &BUNDLED
}
