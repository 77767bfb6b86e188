use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use itertools::Itertools;
use log::{debug, info};
use obesity_model::{
    record::{self, CategoricalField, NumericField},
    ObesityCategory, UserRecord,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    classifier::Classifier, encoder::LabelEncoder, scaler::StandardScaler, Error, Predictor,
    Result,
};

/// Bundle format understood by this crate.
pub const BUNDLE_VERSION: u32 = 1;

/// Fitted transformers and classifier, loaded once and shared read-only.
///
/// `features` declares the model column order and must match
/// [`record::column_names`]. Numeric columns are standardized, categorical
/// columns are replaced by their class index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformerBundle {
    pub version: u32,
    pub features: Vec<String>,
    pub encoders: BTreeMap<String, LabelEncoder>,
    pub scaler: StandardScaler,
    pub target: LabelEncoder,
    pub classifier: Classifier,
}

impl TransformerBundle {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        info!("Loading transformer bundle from {}", path.as_ref().display());
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        let bundle: Self = ron::from_str(text)?;
        bundle.validate()?;
        debug!(
            "Loaded bundle with {} features and classes [{}]",
            bundle.features.len(),
            bundle.target.classes().iter().join(", ")
        );
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != BUNDLE_VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: BUNDLE_VERSION,
            });
        }

        let columns = record::column_names();
        if self.features != columns {
            return Err(Error::SchemaMismatch(format!(
                "expected features [{}], found [{}]",
                columns.iter().join(", "),
                self.features.iter().join(", ")
            )));
        }

        for field in CategoricalField::iter() {
            self.encoders
                .get(field.column())
                .ok_or_else(|| Error::MissingEncoder(field.column().to_owned()))?
                .check(field.column())?;
        }
        if let Some(extra) = self
            .encoders
            .keys()
            .find(|name| CategoricalField::from_str(name).is_err())
        {
            return Err(Error::SchemaMismatch(format!(
                "encoder for unknown field {}",
                extra
            )));
        }

        let numeric: Vec<_> = NumericField::iter().map(NumericField::column).collect();
        if self.scaler.columns != numeric {
            return Err(Error::SchemaMismatch(format!(
                "expected scaled columns [{}], found [{}]",
                numeric.iter().join(", "),
                self.scaler.columns.iter().join(", ")
            )));
        }
        self.scaler.check()?;

        self.target.check("target")?;
        if let Some(label) = self
            .target
            .classes()
            .iter()
            .find(|label| ObesityCategory::from_str(label).is_err())
        {
            return Err(Error::UnknownLabel(label.clone()));
        }

        self.classifier.check(self.features.len(), self.target.len())
    }

    /// Build the model input row for `record`.
    pub fn encode(&self, record: &UserRecord) -> Result<Vec<f64>> {
        let mut row = self.scaler.transform(&record.numeric_values())?;
        for field in CategoricalField::iter() {
            let encoder = self
                .encoders
                .get(field.column())
                .ok_or_else(|| Error::MissingEncoder(field.column().to_owned()))?;
            let index = encoder.transform(field.column(), record.categorical(field))?;
            row.push(index as f64);
        }
        debug!("Encoded row: {:?}", row);
        Ok(row)
    }

    pub fn predict_label(&self, record: &UserRecord) -> Result<&str> {
        let row = self.encode(record)?;
        let class = self.classifier.predict_class(&row)?;
        self.target.inverse_transform(class)
    }
}

impl Predictor for TransformerBundle {
    fn predict(&self, record: &UserRecord) -> Result<ObesityCategory> {
        let label = self.predict_label(record)?;
        ObesityCategory::from_str(label).map_err(|_| Error::UnknownLabel(label.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::{DecisionTree, Node};

    use super::*;

    const SHIPPED_BUNDLE: &str = include_str!("../../obesity_model.ron");

    fn shipped() -> TransformerBundle {
        TransformerBundle::from_ron_str(SHIPPED_BUNDLE).unwrap()
    }

    #[test]
    fn shipped_bundle_is_valid() {
        let bundle = shipped();
        assert_eq!(bundle.version, BUNDLE_VERSION);
        assert_eq!(bundle.target.len(), 6);
    }

    #[test]
    fn default_record_gets_one_of_six_categories() {
        let category = shipped().predict(&UserRecord::default()).unwrap();
        assert!(ObesityCategory::iter().any(|c| c == category));
    }

    #[test]
    fn prediction_is_deterministic() {
        let bundle = shipped();
        let record = UserRecord {
            age: 41.0,
            weight: 97.0,
            snacking: "Frequently".to_owned(),
            ..Default::default()
        };
        let first = bundle.predict(&record).unwrap();
        for i in 0..10 {
            assert_eq!(bundle.predict(&record).unwrap(), first, "Test case #{}", i);
        }
    }

    #[test]
    fn weight_moves_prediction_across_categories() {
        let bundle = shipped();
        let test_data = [
            (40.0, ObesityCategory::InsufficientWeight),
            (60.0, ObesityCategory::NormalWeight),
            (130.0, ObesityCategory::ObesityTypeII),
        ];

        for (i, (weight, expected)) in test_data.into_iter().enumerate() {
            let record = UserRecord {
                weight,
                ..Default::default()
            };
            assert_eq!(bundle.predict(&record).unwrap(), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn encoded_row_follows_schema_order() {
        let bundle = shipped();
        let record = UserRecord {
            gender: "Female".to_owned(),
            transport: "Automobile".to_owned(),
            ..Default::default()
        };
        let row = bundle.encode(&record).unwrap();
        assert_eq!(row.len(), bundle.features.len());
        // Gender and MTRANS are the first and last categorical columns.
        assert_eq!(row[8], 0.0);
        assert_eq!(row[14], 0.0);
    }

    #[test]
    fn unknown_category_propagates() {
        let record = UserRecord {
            transport: "Skateboard".to_owned(),
            ..Default::default()
        };
        match shipped().predict(&record) {
            Err(Error::UnknownCategory { field, value }) => {
                assert_eq!(field, "MTRANS");
                assert_eq!(value, "Skateboard");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let mut bundle = shipped();
        bundle.version = 2;
        assert!(matches!(
            bundle.validate(),
            Err(Error::UnsupportedVersion {
                found: 2,
                expected: BUNDLE_VERSION
            })
        ));
    }

    #[test]
    fn reordered_features_are_rejected() {
        let mut bundle = shipped();
        bundle.features.swap(0, 1);
        assert!(matches!(bundle.validate(), Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn missing_encoder_is_rejected() {
        let mut bundle = shipped();
        bundle.encoders.remove("CAEC");
        assert!(matches!(
            bundle.validate(),
            Err(Error::MissingEncoder(field)) if field == "CAEC"
        ));
    }

    #[test]
    fn unknown_target_label_is_rejected() {
        let mut bundle = shipped();
        let mut classes = bundle.target.classes().to_vec();
        classes[5] = "Obesity_Type_III".to_owned();
        bundle.target = LabelEncoder::new(classes);
        assert!(matches!(
            bundle.validate(),
            Err(Error::UnknownLabel(label)) if label == "Obesity_Type_III"
        ));
    }

    #[test]
    fn classifier_shape_must_match_schema() {
        let mut bundle = shipped();
        bundle.classifier = Classifier::Forest {
            n_features: 15,
            trees: vec![DecisionTree::new(vec![Node::Leaf {
                weights: vec![1.0, 0.0],
            }])],
        };
        assert!(matches!(
            bundle.validate(),
            Err(Error::ShapeMismatch {
                expected: 6,
                actual: 2
            })
        ));
    }

    #[test]
    fn malformed_bundle_fails_to_parse() {
        assert!(matches!(
            TransformerBundle::from_ron_str("(version: 1)"),
            Err(Error::Parse(_))
        ));
    }
}
