//! Input ranges and option sets offered by the submission form.
//!
//! Front ends use these to build their widgets. Inference does not enforce
//! the ranges; vocabulary membership is enforced by the fitted encoders.

use crate::record::{CategoricalField, NumericField};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
    pub field: NumericField,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub static RANGES: [NumericRange; 8] = [
    NumericRange { field: NumericField::Age, min: 1.0, max: 100.0, default: 30.0 },
    NumericRange { field: NumericField::Height, min: 50.0, max: 250.0, default: 170.0 },
    NumericRange { field: NumericField::Weight, min: 20.0, max: 200.0, default: 60.0 },
    NumericRange { field: NumericField::VegetableFrequency, min: 0.0, max: 3.0, default: 2.0 },
    NumericRange { field: NumericField::MainMeals, min: 1.0, max: 5.0, default: 3.0 },
    NumericRange { field: NumericField::WaterIntake, min: 1.0, max: 5.0, default: 2.0 },
    NumericRange { field: NumericField::PhysicalActivity, min: 0.0, max: 20.0, default: 5.0 },
    NumericRange { field: NumericField::TechnologyUse, min: 0.0, max: 24.0, default: 2.0 },
];

/// Options per categorical field. The first option is the form default.
pub static OPTIONS: [(CategoricalField, &[&str]); 7] = [
    (CategoricalField::Gender, &["Male", "Female"]),
    (CategoricalField::Alcohol, &["no", "sometimes", "frequently", "always"]),
    (CategoricalField::CaloricFood, &["no", "yes"]),
    (CategoricalField::Smoking, &["no", "yes"]),
    (CategoricalField::FamilyHistory, &["no", "yes"]),
    (CategoricalField::Snacking, &["no", "Sometimes", "Frequently", "Always"]),
    (
        CategoricalField::Transport,
        &["Walking", "Bike", "Motorbike", "Public Transportation", "Automobile"],
    ),
];

pub fn range(field: NumericField) -> &'static NumericRange {
    let index = match field {
        NumericField::Age => 0,
        NumericField::Height => 1,
        NumericField::Weight => 2,
        NumericField::VegetableFrequency => 3,
        NumericField::MainMeals => 4,
        NumericField::WaterIntake => 5,
        NumericField::PhysicalActivity => 6,
        NumericField::TechnologyUse => 7,
    };
    &RANGES[index]
}

pub fn options(field: CategoricalField) -> &'static [&'static str] {
    OPTIONS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, options)| *options)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_numeric_field_has_a_range() {
        for (i, field) in NumericField::iter().enumerate() {
            let range = range(field);
            assert_eq!(range.field, field, "Test case #{}", i);
            assert!(range.contains(range.default), "Test case #{}", i);
        }
    }

    #[test]
    fn every_categorical_field_has_options() {
        for (i, field) in CategoricalField::iter().enumerate() {
            assert!(!options(field).is_empty(), "Test case #{}", i);
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let age = range(NumericField::Age);
        assert!(age.contains(1.0));
        assert!(age.contains(100.0));
        assert!(!age.contains(0.0));
        assert!(!age.contains(101.0));
    }
}
