use services::{ClassificationError, ClassifyOutcome, error_message};

pub const NOT_LOADED_MESSAGE: &str = "The classifier model is not loaded.";

/// What the classifier form shows under the button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifyResultVm {
    Success { headline: String, confidence: String },
    Warning(String),
    Error(String),
}

#[must_use]
pub fn map_classify_result(result: &Result<ClassifyOutcome, ClassificationError>) -> ClassifyResultVm {
    match result {
        Ok(outcome) => match outcome.confidence_line() {
            Some(confidence) => ClassifyResultVm::Success {
                headline: outcome.message(),
                confidence,
            },
            None => ClassifyResultVm::Warning(outcome.message()),
        },
        Err(err) => ClassifyResultVm::Error(error_message(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::EMPTY_INPUT_MESSAGE;
    use tutor_core::classifier::{ClassLabel, PipelineError, Prediction};

    #[test]
    fn prediction_maps_to_headline_and_confidence() {
        let outcome = ClassifyOutcome::Predicted(Prediction {
            class: 1,
            label: ClassLabel::OffensiveLanguage,
            confidence: 87.456,
            probabilities: vec![0.1, 0.87456, 0.02544],
        });
        assert_eq!(
            map_classify_result(&Ok(outcome)),
            ClassifyResultVm::Success {
                headline: "Prediction: Offensive Language".into(),
                confidence: "Prediction Confidence: 87.46%".into(),
            }
        );
    }

    #[test]
    fn empty_input_maps_to_warning() {
        let outcome = ClassifyOutcome::EmptyInput {
            message: EMPTY_INPUT_MESSAGE,
        };
        assert_eq!(
            map_classify_result(&Ok(outcome)),
            ClassifyResultVm::Warning(EMPTY_INPUT_MESSAGE.into())
        );
    }

    #[test]
    fn failures_are_prefixed() {
        let err = ClassificationError::Pipeline(PipelineError::NonFinite("classifier"));
        let ClassifyResultVm::Error(text) = map_classify_result(&Err(err)) else {
            panic!("expected error");
        };
        assert!(text.starts_with("An error occurred: "));
    }
}
