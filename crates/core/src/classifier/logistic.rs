use serde::{Deserialize, Serialize};

use super::PipelineError;

/// How per-class scores are turned into probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    #[default]
    Multinomial,
    Ovr,
}

/// Fitted logistic regression weights.
///
/// A binary model carries a single coefficient row and two classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub classes: Vec<i64>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub multi_class: MultiClass,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl LogisticRegression {
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn is_binary(&self) -> bool {
        self.coef.len() == 1 && self.classes.len() == 2
    }

    /// # Errors
    ///
    /// Returns `PipelineError` if rows, intercepts and classes disagree.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.coef.is_empty() || self.n_features() == 0 {
            return Err(PipelineError::EmptyArtifact("classifier"));
        }
        if let Some(row) = self.coef.iter().find(|row| row.len() != self.n_features()) {
            return Err(PipelineError::DimensionMismatch {
                stage: "classifier",
                expected: self.n_features(),
                actual: row.len(),
            });
        }
        if self.intercept.len() != self.coef.len() {
            return Err(PipelineError::DimensionMismatch {
                stage: "classifier",
                expected: self.coef.len(),
                actual: self.intercept.len(),
            });
        }
        if !self.is_binary() && self.classes.len() != self.coef.len() {
            return Err(PipelineError::DimensionMismatch {
                stage: "classifier",
                expected: self.coef.len(),
                actual: self.classes.len(),
            });
        }
        Ok(())
    }

    /// Raw per-row scores `coef · z + intercept`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::DimensionMismatch` if `z` has the wrong width.
    pub fn decision_function(&self, z: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if z.len() != self.n_features() {
            return Err(PipelineError::DimensionMismatch {
                stage: "classifier",
                expected: self.n_features(),
                actual: z.len(),
            });
        }
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| row.iter().zip(z).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect())
    }

    /// Class probabilities, aligned with `classes`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError` on a width mismatch or non-finite scores.
    pub fn predict_proba(&self, z: &[f64]) -> Result<Vec<f64>, PipelineError> {
        let scores = self.decision_function(z)?;
        if scores.iter().any(|s| !s.is_finite()) {
            return Err(PipelineError::NonFinite("classifier"));
        }

        if self.is_binary() {
            let p = sigmoid(scores[0]);
            return Ok(vec![1.0 - p, p]);
        }

        let probs = match self.multi_class {
            MultiClass::Multinomial => {
                let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
                let total: f64 = exps.iter().sum();
                exps.into_iter().map(|e| e / total).collect()
            }
            MultiClass::Ovr => {
                let raw: Vec<f64> = scores.iter().map(|s| sigmoid(*s)).collect();
                let total: f64 = raw.iter().sum();
                raw.into_iter().map(|p| p / total).collect()
            }
        };
        Ok(probs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_class() -> LogisticRegression {
        LogisticRegression {
            classes: vec![0, 1, 2],
            coef: vec![vec![2.0, 0.0], vec![0.0, 2.0], vec![0.0, 0.0]],
            intercept: vec![0.0, 0.0, 0.5],
            multi_class: MultiClass::Multinomial,
        }
    }

    #[test]
    fn decision_is_affine() {
        let scores = three_class().decision_function(&[1.0, 3.0]).unwrap();
        assert_eq!(scores, vec![2.0, 6.0, 0.5]);
    }

    #[test]
    fn softmax_sums_to_one_and_prefers_highest_score() {
        let probs = three_class().predict_proba(&[1.0, 3.0]).unwrap();
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(probs[1] > probs[0] && probs[0] > probs[2]);
    }

    #[test]
    fn ovr_normalises_sigmoids() {
        let mut model = three_class();
        model.multi_class = MultiClass::Ovr;
        let probs = model.predict_proba(&[0.0, 0.0]).unwrap();
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(probs[2] > probs[0]);
    }

    #[test]
    fn binary_model_yields_two_probabilities() {
        let model = LogisticRegression {
            classes: vec![0, 1],
            coef: vec![vec![1.0]],
            intercept: vec![0.0],
            multi_class: MultiClass::Multinomial,
        };
        model.validate().unwrap();
        assert_eq!(model.predict_proba(&[0.0]).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn validate_rejects_mismatched_intercepts() {
        let mut model = three_class();
        model.intercept.pop();
        assert!(model.validate().is_err());
    }
}
