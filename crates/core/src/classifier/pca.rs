use serde::{Deserialize, Serialize};

use super::PipelineError;

/// Fitted principal component projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pca {
    pub mean: Vec<f64>,
    pub components: Vec<Vec<f64>>,
    #[serde(default)]
    pub explained_variance: Vec<f64>,
    #[serde(default)]
    pub whiten: bool,
}

impl Pca {
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    #[must_use]
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// # Errors
    ///
    /// Returns `PipelineError` if component rows disagree with `mean`, or if
    /// whitening is requested without a usable variance per component.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.mean.is_empty() || self.components.is_empty() {
            return Err(PipelineError::EmptyArtifact("reducer"));
        }
        if let Some(row) = self.components.iter().find(|row| row.len() != self.mean.len()) {
            return Err(PipelineError::DimensionMismatch {
                stage: "reducer",
                expected: self.mean.len(),
                actual: row.len(),
            });
        }
        if self.whiten {
            if self.explained_variance.len() != self.components.len() {
                return Err(PipelineError::DimensionMismatch {
                    stage: "reducer",
                    expected: self.components.len(),
                    actual: self.explained_variance.len(),
                });
            }
            if self.explained_variance.iter().any(|v| *v <= 0.0) {
                return Err(PipelineError::InvalidArtifact {
                    stage: "reducer",
                    detail: "explained variance must be positive to whiten".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Project `x` onto the components: `(x - mean) · componentsᵀ`.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::DimensionMismatch` if `x` has the wrong width.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if x.len() != self.n_features() {
            return Err(PipelineError::DimensionMismatch {
                stage: "reducer",
                expected: self.n_features(),
                actual: x.len(),
            });
        }

        let centered: Vec<f64> = x.iter().zip(&self.mean).map(|(v, m)| v - m).collect();
        let mut projected: Vec<f64> = self
            .components
            .iter()
            .map(|row| row.iter().zip(&centered).map(|(c, v)| c * v).sum())
            .collect();

        if self.whiten {
            for (value, variance) in projected.iter_mut().zip(&self.explained_variance) {
                *value /= variance.sqrt();
            }
        }
        Ok(projected)
    }
}
