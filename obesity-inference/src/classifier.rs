//! Fitted classifiers that map a feature row to a class index.
//!
//! Two model families are supported:
//! - a decision forest, voting with the normalized class weights of the
//!   reached leaves;
//! - a multinomial linear model, picking the class with the highest
//!   decision value.
//!
//! Ties are broken towards the lowest class index.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Rows with `features[feature] <= threshold` continue at `left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { weights: Vec<f64> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn leaf(&self, features: &[f64]) -> Result<&[f64]> {
        let mut index = 0;
        // An acyclic walk visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(Node::Leaf { weights }) => return Ok(weights.as_slice()),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).ok_or(Error::ShapeMismatch {
                        expected: feature + 1,
                        actual: features.len(),
                    })?;
                    index = if value <= threshold { *left } else { *right };
                }
                None => return Err(Error::InvalidModel(format!("missing node {}", index))),
            }
        }
        Err(Error::InvalidModel(format!(
            "no leaf reached within {} steps, stopped at node {}",
            self.nodes.len(),
            index
        )))
    }

    fn check(&self, n_features: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::InvalidModel("empty tree".to_owned()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= n_features {
                        return Err(Error::InvalidModel(format!(
                            "node {} splits on feature {} of {}",
                            index, feature, n_features
                        )));
                    }
                    // Children always follow their parent, so traversal terminates.
                    for child in [left, right] {
                        if *child <= index || *child >= self.nodes.len() {
                            return Err(Error::InvalidModel(format!(
                                "node {} has invalid child {}",
                                index, child
                            )));
                        }
                    }
                }
                Node::Leaf { weights } => {
                    if weights.len() != n_classes {
                        return Err(Error::ShapeMismatch {
                            expected: n_classes,
                            actual: weights.len(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Classifier {
    Forest {
        n_features: usize,
        trees: Vec<DecisionTree>,
    },
    Linear {
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
}

impl Classifier {
    pub fn n_features(&self) -> usize {
        match self {
            Classifier::Forest { n_features, .. } => *n_features,
            Classifier::Linear { coefficients, .. } => {
                coefficients.first().map(Vec::len).unwrap_or_default()
            }
        }
    }

    /// Per-class scores for a single row: averaged leaf probabilities for a
    /// forest, decision values for a linear model.
    pub fn class_scores(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features() {
            return Err(Error::ShapeMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        match self {
            Classifier::Forest { trees, .. } => {
                let mut scores: Vec<f64> = Vec::new();
                for tree in trees {
                    let weights = tree.leaf(features)?;
                    if scores.is_empty() {
                        scores = vec![0.0; weights.len()];
                    }
                    let total: f64 = weights.iter().sum();
                    if total <= 0.0 {
                        continue;
                    }
                    scores
                        .iter_mut()
                        .zip(weights)
                        .for_each(|(score, weight)| *score += weight / total);
                }
                let n_trees = trees.len().max(1) as f64;
                Ok(scores.into_iter().map(|score| score / n_trees).collect())
            }
            Classifier::Linear {
                coefficients,
                intercepts,
            } => Ok(coefficients
                .iter()
                .zip(intercepts)
                .map(|(row, intercept)| {
                    row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
                })
                .collect()),
        }
    }

    pub fn predict_class(&self, features: &[f64]) -> Result<usize> {
        let scores = self.class_scores(features)?;
        argmax(&scores).ok_or_else(|| Error::InvalidModel("no classes".to_owned()))
    }

    pub(crate) fn check(&self, n_features: usize, n_classes: usize) -> Result<()> {
        if self.n_features() != n_features {
            return Err(Error::ShapeMismatch {
                expected: n_features,
                actual: self.n_features(),
            });
        }

        match self {
            Classifier::Forest { trees, .. } => {
                if trees.is_empty() {
                    return Err(Error::InvalidModel("forest has no trees".to_owned()));
                }
                trees
                    .iter()
                    .try_for_each(|tree| tree.check(n_features, n_classes))
            }
            Classifier::Linear {
                coefficients,
                intercepts,
            } => {
                for len in [coefficients.len(), intercepts.len()] {
                    if len != n_classes {
                        return Err(Error::ShapeMismatch {
                            expected: n_classes,
                            actual: len,
                        });
                    }
                }
                match coefficients.iter().find(|row| row.len() != n_features) {
                    Some(row) => Err(Error::ShapeMismatch {
                        expected: n_features,
                        actual: row.len(),
                    }),
                    None => Ok(()),
                }
            }
        }
    }
}

fn argmax(scores: &[f64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, &score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}
