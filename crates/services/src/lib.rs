#![forbid(unsafe_code)]

pub mod advisor_service;
pub mod app_services;
pub mod classification_service;
pub mod error;
pub mod quiz_service;

pub use advisor_service::{AreaReport, INVALID_DIMENSIONS_MESSAGE, ShapeAdvisorService};
pub use app_services::AppServices;
pub use classification_service::{
    ClassificationService, ClassifyOutcome, EMPTY_INPUT_MESSAGE, error_message,
};
pub use error::{AdvisorError, ArtifactLoadError, ClassificationError};
pub use quiz_service::{DEFAULT_ADVANCE_DELAY, QuizService, QuizStep, ScheduledAdvance};
