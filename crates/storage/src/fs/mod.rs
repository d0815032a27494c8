use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tutor_core::classifier::{LogisticRegression, Pca, TfidfVectorizer};

use crate::repository::{ArtifactRepository, StorageError};

pub const DEFAULT_MODEL_DIR: &str = "Model";
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const REDUCER_FILE: &str = "pca.json";
pub const CLASSIFIER_FILE: &str = "lr_model.json";

/// Artifact store backed by JSON files in one directory.
#[derive(Debug, Clone)]
pub struct FsArtifactRepository {
    dir: PathBuf,
}

impl Default for FsArtifactRepository {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_DIR)
    }
}

impl FsArtifactRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, StorageError> {
        let path = self.path_of(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StorageError::Missing { path });
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization {
            path,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ArtifactRepository for FsArtifactRepository {
    async fn load_vectorizer(&self) -> Result<TfidfVectorizer, StorageError> {
        self.read_json(VECTORIZER_FILE).await
    }

    async fn load_reducer(&self) -> Result<Pca, StorageError> {
        self.read_json(REDUCER_FILE).await
    }

    async fn load_classifier(&self) -> Result<LogisticRegression, StorageError> {
        self.read_json(CLASSIFIER_FILE).await
    }
}
