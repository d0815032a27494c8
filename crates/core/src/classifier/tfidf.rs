use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[allow(clippy::unnecessary_wraps)]
fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Fitted TF-IDF vocabulary and inverse document frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

impl TfidfVectorizer {
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// # Errors
    ///
    /// Returns `PipelineError` if the vocabulary points outside `idf` or the
    /// n-gram range is malformed.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.idf.is_empty() || self.vocabulary.is_empty() {
            return Err(PipelineError::EmptyArtifact("vectorizer"));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(PipelineError::InvalidArtifact {
                stage: "vectorizer",
                detail: format!("ngram_range ({min_n}, {max_n}) is invalid"),
            });
        }
        if let Some((term, &idx)) = self
            .vocabulary
            .iter()
            .find(|(_, idx)| **idx >= self.idf.len())
        {
            return Err(PipelineError::InvalidArtifact {
                stage: "vectorizer",
                detail: format!("term `{term}` maps to column {idx} of {}", self.idf.len()),
            });
        }
        if self.idf.iter().any(|v| !v.is_finite()) {
            return Err(PipelineError::NonFinite("vectorizer"));
        }
        Ok(())
    }

    /// Dense TF-IDF row for one tokenised document.
    #[must_use]
    pub fn transform(&self, tokens: &[&str]) -> Vec<f64> {
        let mut row = vec![0.0_f64; self.n_features()];
        let (min_n, max_n) = self.ngram_range;

        for n in min_n.max(1)..=max_n {
            for gram in tokens.windows(n) {
                let term = gram.join(" ");
                if let Some(&idx) = self.vocabulary.get(&term) {
                    row[idx] += 1.0;
                }
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            if *value > 0.0 {
                let tf = if self.sublinear_tf { 1.0 + value.ln() } else { *value };
                *value = tf * idf;
            }
        }

        let scale = match self.norm {
            Some(Norm::L2) => row.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => row.iter().map(|v| v.abs()).sum::<f64>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for value in &mut row {
                *value /= scale;
            }
        }
        row
    }
}
