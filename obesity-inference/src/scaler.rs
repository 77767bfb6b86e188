use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Standardizes numeric columns with fitted means and scales.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub columns: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(columns: Vec<String>, mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            columns,
            mean,
            scale,
        }
    }

    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.mean.len() {
            return Err(Error::ShapeMismatch {
                expected: self.mean.len(),
                actual: values.len(),
            });
        }

        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            // Constant columns are fitted with a zero scale.
            .map(|(x, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.mean.len() != self.columns.len() {
            return Err(Error::ShapeMismatch {
                expected: self.columns.len(),
                actual: self.mean.len(),
            });
        }
        if self.scale.len() != self.columns.len() {
            return Err(Error::ShapeMismatch {
                expected: self.columns.len(),
                actual: self.scale.len(),
            });
        }
        Ok(())
    }
}
