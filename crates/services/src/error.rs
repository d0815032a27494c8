//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use tutor_core::classifier::PipelineError;

/// Errors emitted by `ShapeAdvisorService`.
pub use tutor_core::model::ShapeError as AdvisorError;

/// Errors emitted while loading classifier artifacts. Fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArtifactLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("artifacts are inconsistent: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Errors emitted by a single classification request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassificationError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
