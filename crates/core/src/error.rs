use thiserror::Error;

use crate::classifier::PipelineError;
use crate::model::{QuizError, ShapeError};
use crate::number::NumberParseError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Number(#[from] NumberParseError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
