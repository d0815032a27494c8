use serde::Serialize;
use tracing::{debug, info, warn};

use storage::{ArtifactBundle, ArtifactRepository};
use tutor_core::classifier::{Prediction, TextClassifier};

use crate::error::{ArtifactLoadError, ClassificationError};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a tweet to classify!";

/// What a classification request produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClassifyOutcome {
    /// Blank input; the pipeline was not run.
    EmptyInput { message: &'static str },
    Predicted(Prediction),
}

impl ClassifyOutcome {
    /// Headline shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EmptyInput { message } => (*message).to_owned(),
            Self::Predicted(prediction) => format!("Prediction: {}", prediction.label),
        }
    }

    /// Secondary line with the confidence, if there is a prediction.
    #[must_use]
    pub fn confidence_line(&self) -> Option<String> {
        match self {
            Self::EmptyInput { .. } => None,
            Self::Predicted(prediction) => Some(format!(
                "Prediction Confidence: {:.2}%",
                prediction.confidence
            )),
        }
    }
}

/// User-facing text for a failed request.
#[must_use]
pub fn error_message(err: &ClassificationError) -> String {
    format!("An error occurred: {err}")
}

/// Classifies text with artifacts loaded once and then shared read-only.
#[derive(Debug, Clone)]
pub struct ClassificationService {
    classifier: TextClassifier,
}

impl ClassificationService {
    /// Load and cross-check all artifacts from `repo`.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactLoadError` if any artifact is missing or malformed,
    /// or the stages do not fit together.
    pub async fn load(repo: &dyn ArtifactRepository) -> Result<Self, ArtifactLoadError> {
        let bundle = ArtifactBundle::load(repo).await?;
        let service = Self::from_bundle(bundle)?;
        info!("classifier artifacts loaded");
        Ok(service)
    }

    /// # Errors
    ///
    /// Returns `ArtifactLoadError::Pipeline` if the stages do not fit together.
    pub fn from_bundle(bundle: ArtifactBundle) -> Result<Self, ArtifactLoadError> {
        let classifier = TextClassifier::new(bundle.vectorizer, bundle.reducer, bundle.classifier)?;
        Ok(Self { classifier })
    }

    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        self.classifier.clean(text)
    }

    /// Classify one line of text.
    ///
    /// # Errors
    ///
    /// Returns `ClassificationError` if a pipeline stage fails.
    pub fn classify(&self, text: &str) -> Result<ClassifyOutcome, ClassificationError> {
        if text.trim().is_empty() {
            warn!("empty classification input");
            return Ok(ClassifyOutcome::EmptyInput {
                message: EMPTY_INPUT_MESSAGE,
            });
        }

        let prediction = self.classifier.predict(text).inspect_err(|err| {
            warn!(error = %err, "classification failed");
        })?;
        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "classified text"
        );
        Ok(ClassifyOutcome::Predicted(prediction))
    }
}
