//! JSON persistence for the built structures.
//!
//! Each structure is its own artifact so it can be served and loaded on its
//! own. Ordering survives a round trip because every map is an `IndexMap`.

use crate::index::{CategoryIndex, Indices, LanguageStore, ReverseIndex};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact I/O failed for `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact `{path}` is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("artifact could not be parsed: {0}")]
    Decode(#[source] serde_json::Error),
}

pub const LANGUAGES_FILE: &str = "languages.json";
pub const EXTENSIONS_FILE: &str = "extensions.json";
pub const FILENAMES_FILE: &str = "filenames.json";
pub const CATEGORIES_FILE: &str = "categories.json";

pub trait Artifact: Serialize + DeserializeOwned + Sized {
    fn write_json<W: Write>(&self, writer: W) -> Result<(), ArtifactError> {
        serde_json::to_writer(writer, self).map_err(ArtifactError::Encode)
    }

    fn read_json<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        serde_json::from_reader(reader).map_err(ArtifactError::Decode)
    }

    fn to_json_string(&self) -> Result<String, ArtifactError> {
        serde_json::to_string(self).map_err(ArtifactError::Encode)
    }

    fn write_file(&self, path: &Path) -> Result<(), ArtifactError> {
        let file = File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_file(path: &Path) -> Result<Self, ArtifactError> {
        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Artifact for LanguageStore {}
impl Artifact for ReverseIndex {}
impl Artifact for CategoryIndex {}

impl Indices {
    /// Write the four artifacts into `dir`, creating it if needed.
    pub fn write_dir(&self, dir: &Path) -> Result<(), ArtifactError> {
        fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        self.languages.write_file(&dir.join(LANGUAGES_FILE))?;
        self.extensions.write_file(&dir.join(EXTENSIONS_FILE))?;
        self.filenames.write_file(&dir.join(FILENAMES_FILE))?;
        self.categories.write_file(&dir.join(CATEGORIES_FILE))?;
        Ok(())
    }

    pub fn read_dir(dir: &Path) -> Result<Self, ArtifactError> {
        Ok(Self {
            languages: LanguageStore::read_file(&dir.join(LANGUAGES_FILE))?,
            extensions: ReverseIndex::read_file(&dir.join(EXTENSIONS_FILE))?,
            filenames: ReverseIndex::read_file(&dir.join(FILENAMES_FILE))?,
            categories: CategoryIndex::read_file(&dir.join(CATEGORIES_FILE))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::build_indices, dataset::bundled_dataset};

    #[test]
    fn each_artifact_round_trips_in_order() {
        let idx = build_indices(&bundled_dataset());

        let mut buf = Vec::new();
        idx.extensions.write_json(&mut buf).unwrap();
        let back = ReverseIndex::read_json(buf.as_slice()).unwrap();
        assert_eq!(back, idx.extensions);
        let original: Vec<_> = idx.extensions.iter().map(|(k, _)| k).collect();
        let restored: Vec<_> = back.iter().map(|(k, _)| k).collect();
        assert_eq!(original, restored);

        let json = idx.categories.to_json_string().unwrap();
        assert_eq!(CategoryIndex::read_json(json.as_bytes()).unwrap(), idx.categories);

        let json = idx.languages.to_json_string().unwrap();
        assert_eq!(LanguageStore::read_json(json.as_bytes()).unwrap(), idx.languages);
    }

    #[test]
    fn directory_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let idx = build_indices(&bundled_dataset());
        idx.write_dir(dir.path()).unwrap();
        assert!(dir.path().join(FILENAMES_FILE).exists());
        assert_eq!(Indices::read_dir(dir.path()).unwrap(), idx);
    }

    #[test]
    fn single_artifact_loads_alone() {
        let dir = tempfile::tempdir().unwrap();
        let idx = build_indices(&bundled_dataset());
        idx.languages.write_file(&dir.path().join(LANGUAGES_FILE)).unwrap();
        let store = LanguageStore::read_file(&dir.path().join(LANGUAGES_FILE)).unwrap();
        assert_eq!(store.get("rust").unwrap().name, "Rust");
        assert!(Indices::read_dir(dir.path()).is_err());
    }

    #[test]
    fn corrupt_artifact_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXTENSIONS_FILE);
        fs::write(&path, "{not json").unwrap();
        let err = ReverseIndex::read_file(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Json { .. }));
        assert!(err.to_string().contains(EXTENSIONS_FILE));
    }

    #[test]
    fn malformed_stream_is_a_parse_error() {
        let err = CategoryIndex::read_json(&b"[1, 2"[..]).unwrap_err();
        assert!(matches!(err, ArtifactError::Decode(_)));
        assert!(err.to_string().starts_with("artifact could not be parsed"));
    }
}
