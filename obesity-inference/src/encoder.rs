use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maps between category strings and their fitted class indices.
///
/// Serialized as the plain list of classes; a value encodes to its position
/// in that list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new<S: Into<String>>(classes: impl IntoIterator<Item = S>) -> Self {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.classes.iter().any(|class| class == value)
    }

    /// Encode `value` of the column `field`.
    pub fn transform(&self, field: &str, value: &str) -> Result<usize> {
        self.classes
            .iter()
            .position(|class| class == value)
            .ok_or_else(|| Error::UnknownCategory {
                field: field.to_owned(),
                value: value.to_owned(),
            })
    }

    pub fn inverse_transform(&self, index: usize) -> Result<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(Error::UnknownClass(index))
    }

    pub(crate) fn check(&self, field: &str) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::InvalidEncoder {
                field: field.to_owned(),
                reason: "no classes".to_owned(),
            });
        }

        let duplicates = self.classes.iter().duplicates().join(", ");
        if !duplicates.is_empty() {
            return Err(Error::InvalidEncoder {
                field: field.to_owned(),
                reason: format!("duplicate classes {}", duplicates),
            });
        }

        Ok(())
    }
}
