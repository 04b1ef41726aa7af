pub mod artifact;
pub mod builder;
pub mod dataset;
pub mod error;
pub mod fingerprint;
pub mod index;
pub mod integrity;
pub mod lang;
pub mod path;
pub mod resolver;

pub use artifact::{Artifact, ArtifactError};
pub use builder::{
    BuildError, BuildOptions, BuildReport, CollisionPolicy, IndexBuilder, build_indices,
    build_with_options,
};
pub use dataset::{Bundled, DatasetSource, JsonFile, LanguageDef, RawDataset, bundled_dataset};
pub use error::LangmapError;
pub use fingerprint::{Fingerprint, needs_republish};
pub use index::{CategoryIndex, Indices, LanguageStore, ReverseIndex};
pub use lang::{Category, LanguageRecord, language_key};
pub use resolver::{Resolver, ResolverBuilder, bundled};

/// Load a dataset from `source` and build a resolver over it.
pub fn load<S: DatasetSource>(
    source: &S,
    options: BuildOptions,
) -> Result<(Resolver, BuildReport), LangmapError> {
    let dataset = source.load()?;
    let (indices, report) = build_with_options(&dataset, options)?;
    Ok((Resolver::new(indices), report))
}
