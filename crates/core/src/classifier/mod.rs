//! Tweet classification: text cleaning, Porter stemming and the fitted
//! TF-IDF → PCA → logistic regression chain.

mod clean;
mod logistic;
mod pca;
mod pipeline;
mod porter;
mod stopwords;
mod tfidf;

use thiserror::Error;

pub use clean::TextCleaner;
pub use logistic::{LogisticRegression, MultiClass};
pub use pca::Pca;
pub use pipeline::{ClassLabel, Prediction, TextClassifier};
pub use porter::PorterStemmer;
pub use stopwords::{ENGLISH_STOPWORDS, is_stopword};
pub use tfidf::{Norm, TfidfVectorizer};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("invalid pattern: {0}")]
    Pattern(String),

    #[error("{stage}: expected {expected} values, found {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{0} artifact is empty")]
    EmptyArtifact(&'static str),

    #[error("{stage}: {detail}")]
    InvalidArtifact { stage: &'static str, detail: String },

    #[error("model predicted unknown class {0}")]
    UnknownClass(i64),

    #[error("{0} produced a non-finite value")]
    NonFinite(&'static str),
}

impl From<regex::Error> for PipelineError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}
