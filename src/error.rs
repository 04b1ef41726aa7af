use crate::{artifact::ArtifactError, builder::BuildError, dataset::DatasetError};
use thiserror::Error;

/// Umbrella error for the offline side (loading, building, persisting).
/// Queries never fail; they return `None` or an empty list.
#[derive(Debug, Error)]
pub enum LangmapError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}
