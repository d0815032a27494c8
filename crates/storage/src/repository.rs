use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tutor_core::classifier::{LogisticRegression, Pca, TfidfVectorizer};

/// Errors surfaced by artifact stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {}: {message}", path.display())]
    Serialization { path: PathBuf, message: String },
}

/// Read-only access to the three fitted classifier stages.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the vectorizer cannot be read or decoded.
    async fn load_vectorizer(&self) -> Result<TfidfVectorizer, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the reducer cannot be read or decoded.
    async fn load_reducer(&self) -> Result<Pca, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the classifier cannot be read or decoded.
    async fn load_classifier(&self) -> Result<LogisticRegression, StorageError>;
}

/// All three artifacts, loaded together.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub vectorizer: TfidfVectorizer,
    pub reducer: Pca,
    pub classifier: LogisticRegression,
}

impl ArtifactBundle {
    /// Load every artifact from `repo`, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` encountered.
    pub async fn load(repo: &dyn ArtifactRepository) -> Result<Self, StorageError> {
        Ok(Self {
            vectorizer: repo.load_vectorizer().await?,
            reducer: repo.load_reducer().await?,
            classifier: repo.load_classifier().await?,
        })
    }
}

/// In-memory store for tests and prototyping.
///
/// Slots left empty report `StorageError::Missing` with a synthetic path.
#[derive(Clone, Default)]
pub struct InMemoryArtifactRepository {
    vectorizer: Option<TfidfVectorizer>,
    reducer: Option<Pca>,
    classifier: Option<LogisticRegression>,
}

impl InMemoryArtifactRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bundle(bundle: ArtifactBundle) -> Self {
        Self::new()
            .with_vectorizer(bundle.vectorizer)
            .with_reducer(bundle.reducer)
            .with_classifier(bundle.classifier)
    }

    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: TfidfVectorizer) -> Self {
        self.vectorizer = Some(vectorizer);
        self
    }

    #[must_use]
    pub fn with_reducer(mut self, reducer: Pca) -> Self {
        self.reducer = Some(reducer);
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: LogisticRegression) -> Self {
        self.classifier = Some(classifier);
        self
    }
}

fn read_slot<T: Clone>(slot: Option<&T>, name: &str) -> Result<T, StorageError> {
    slot.cloned().ok_or_else(|| StorageError::Missing {
        path: PathBuf::from(format!("memory://{name}")),
    })
}

#[async_trait]
impl ArtifactRepository for InMemoryArtifactRepository {
    async fn load_vectorizer(&self) -> Result<TfidfVectorizer, StorageError> {
        read_slot(self.vectorizer.as_ref(), "vectorizer")
    }

    async fn load_reducer(&self) -> Result<Pca, StorageError> {
        read_slot(self.reducer.as_ref(), "reducer")
    }

    async fn load_classifier(&self) -> Result<LogisticRegression, StorageError> {
        read_slot(self.classifier.as_ref(), "classifier")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tutor_core::classifier::MultiClass;

    fn bundle() -> ArtifactBundle {
        ArtifactBundle {
            vectorizer: TfidfVectorizer {
                vocabulary: HashMap::from([("hate".to_string(), 0)]),
                idf: vec![1.0],
                ngram_range: (1, 1),
                sublinear_tf: false,
                norm: None,
            },
            reducer: Pca {
                mean: vec![0.0],
                components: vec![vec![1.0]],
                explained_variance: Vec::new(),
                whiten: false,
            },
            classifier: LogisticRegression {
                classes: vec![0, 2],
                coef: vec![vec![-1.0]],
                intercept: vec![0.0],
                multi_class: MultiClass::Multinomial,
            },
        }
    }

    #[tokio::test]
    async fn in_memory_round_trips_a_bundle() {
        let repo = InMemoryArtifactRepository::with_bundle(bundle());
        let loaded = ArtifactBundle::load(&repo).await.unwrap();
        assert_eq!(loaded.vectorizer, bundle().vectorizer);
        assert_eq!(loaded.reducer, bundle().reducer);
        assert_eq!(loaded.classifier, bundle().classifier);
    }

    #[tokio::test]
    async fn empty_slot_reports_missing() {
        let repo = InMemoryArtifactRepository::new().with_vectorizer(bundle().vectorizer);
        let err = ArtifactBundle::load(&repo).await.unwrap_err();
        assert!(matches!(err, StorageError::Missing { ref path } if path.ends_with("reducer")));
    }

    #[tokio::test]
    async fn each_slot_is_loaded_independently() {
        let repo = InMemoryArtifactRepository::new()
            .with_reducer(bundle().reducer)
            .with_classifier(bundle().classifier);
        assert_eq!(repo.load_reducer().await.unwrap(), bundle().reducer);
        assert_eq!(repo.load_classifier().await.unwrap(), bundle().classifier);
        let err = repo.load_vectorizer().await.unwrap_err();
        assert!(matches!(err, StorageError::Missing { ref path } if path.ends_with("vectorizer")));
    }

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryArtifactRepository>();
    }
}
