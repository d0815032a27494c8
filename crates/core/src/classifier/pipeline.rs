use std::fmt;

use serde::Serialize;

use super::{LogisticRegression, Pca, PipelineError, TextCleaner, TfidfVectorizer};

/// The three categories the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassLabel {
    #[serde(rename = "Hate Speech")]
    HateSpeech,
    #[serde(rename = "Offensive Language")]
    OffensiveLanguage,
    #[serde(rename = "Neither")]
    Neither,
}

impl ClassLabel {
    pub const ALL: [Self; 3] = [Self::HateSpeech, Self::OffensiveLanguage, Self::Neither];

    #[must_use]
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Self::HateSpeech),
            1 => Some(Self::OffensiveLanguage),
            2 => Some(Self::Neither),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HateSpeech => "Hate Speech",
            Self::OffensiveLanguage => "Offensive Language",
            Self::Neither => "Neither",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub class: i64,
    pub label: ClassLabel,
    /// Probability of the winning class, as a percentage.
    pub confidence: f64,
    /// Per-class probabilities, aligned with the model's `classes`.
    pub probabilities: Vec<f64>,
}

/// Cleaner plus the three fitted stages, checked for matching widths.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    cleaner: TextCleaner,
    vectorizer: TfidfVectorizer,
    reducer: Pca,
    model: LogisticRegression,
}

impl TextClassifier {
    /// # Errors
    ///
    /// Returns `PipelineError` if any stage is malformed or the output width
    /// of one stage is not the input width of the next.
    pub fn new(
        vectorizer: TfidfVectorizer,
        reducer: Pca,
        model: LogisticRegression,
    ) -> Result<Self, PipelineError> {
        vectorizer.validate()?;
        reducer.validate()?;
        model.validate()?;

        if vectorizer.n_features() != reducer.n_features() {
            return Err(PipelineError::DimensionMismatch {
                stage: "reducer",
                expected: vectorizer.n_features(),
                actual: reducer.n_features(),
            });
        }
        if reducer.n_components() != model.n_features() {
            return Err(PipelineError::DimensionMismatch {
                stage: "classifier",
                expected: reducer.n_components(),
                actual: model.n_features(),
            });
        }
        if let Some(&class) = model
            .classes
            .iter()
            .find(|c| ClassLabel::from_class(**c).is_none())
        {
            return Err(PipelineError::UnknownClass(class));
        }

        Ok(Self {
            cleaner: TextCleaner::new()?,
            vectorizer,
            reducer,
            model,
        })
    }

    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// # Errors
    ///
    /// Returns `PipelineError` if a stage produces a value the next one
    /// cannot use.
    pub fn predict(&self, text: &str) -> Result<Prediction, PipelineError> {
        let cleaned = self.cleaner.clean(text);
        let tokens = self.cleaner.tokens(&cleaned);
        let features = self.vectorizer.transform(&tokens);
        let reduced = self.reducer.transform(&features)?;
        let probabilities = self.model.predict_proba(&reduced)?;

        let (idx, best) = probabilities
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, p)| if p > acc.1 { (i, p) } else { acc });
        if !best.is_finite() {
            return Err(PipelineError::NonFinite("classifier"));
        }

        let class = self.model.classes[idx];
        let label = ClassLabel::from_class(class).ok_or(PipelineError::UnknownClass(class))?;
        Ok(Prediction {
            class,
            label,
            confidence: (best * 100.0).clamp(0.0, 100.0),
            probabilities,
        })
    }
}
