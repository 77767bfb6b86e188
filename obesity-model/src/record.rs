use chrono::NaiveDate;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::form;

/// Numeric model inputs, in model column order.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, IntoStaticStr, Eq, Hash, PartialEq)]
pub enum NumericField {
    #[strum(to_string = "Age")]
    Age,
    #[strum(to_string = "Height")]
    Height,
    #[strum(to_string = "Weight")]
    Weight,
    #[strum(to_string = "FCVC")]
    VegetableFrequency,
    #[strum(to_string = "NCP")]
    MainMeals,
    #[strum(to_string = "CH2O")]
    WaterIntake,
    #[strum(to_string = "FAF")]
    PhysicalActivity,
    #[strum(to_string = "TUE")]
    TechnologyUse,
}

/// Categorical model inputs, in model column order.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, IntoStaticStr, Eq, Hash, PartialEq)]
pub enum CategoricalField {
    #[strum(to_string = "Gender")]
    Gender,
    #[strum(to_string = "CALC")]
    Alcohol,
    #[strum(to_string = "FAVC")]
    CaloricFood,
    #[strum(to_string = "SMOKE")]
    Smoking,
    #[strum(to_string = "family_history_with_overweight")]
    FamilyHistory,
    #[strum(to_string = "CAEC")]
    Snacking,
    #[strum(to_string = "MTRANS")]
    Transport,
}

impl NumericField {
    pub fn column(self) -> &'static str {
        self.into()
    }
}

impl CategoricalField {
    pub fn column(self) -> &'static str {
        self.into()
    }
}

/// Column names in the order the classifier expects them: all numeric
/// fields first, then all categorical fields.
pub fn column_names() -> Vec<&'static str> {
    NumericField::iter()
        .map(NumericField::column)
        .chain(CategoricalField::iter().map(CategoricalField::column))
        .collect()
}

/// A single form submission, as fed to the classifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UserRecord {
    #[cfg_attr(feature = "serde", serde(rename = "Age"))]
    pub age: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Height"))]
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Weight"))]
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(rename = "FCVC"))]
    pub vegetable_frequency: f64,
    #[cfg_attr(feature = "serde", serde(rename = "NCP"))]
    pub main_meals: f64,
    #[cfg_attr(feature = "serde", serde(rename = "CH2O"))]
    pub water_intake: f64,
    #[cfg_attr(feature = "serde", serde(rename = "FAF"))]
    pub physical_activity: f64,
    #[cfg_attr(feature = "serde", serde(rename = "TUE"))]
    pub technology_use: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Gender"))]
    pub gender: String,
    #[cfg_attr(feature = "serde", serde(rename = "CALC"))]
    pub alcohol: String,
    #[cfg_attr(feature = "serde", serde(rename = "FAVC"))]
    pub caloric_food: String,
    #[cfg_attr(feature = "serde", serde(rename = "SMOKE"))]
    pub smoking: String,
    #[cfg_attr(feature = "serde", serde(rename = "family_history_with_overweight"))]
    pub family_history: String,
    #[cfg_attr(feature = "serde", serde(rename = "CAEC"))]
    pub snacking: String,
    #[cfg_attr(feature = "serde", serde(rename = "MTRANS"))]
    pub transport: String,
}

impl UserRecord {
    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Age => self.age,
            NumericField::Height => self.height,
            NumericField::Weight => self.weight,
            NumericField::VegetableFrequency => self.vegetable_frequency,
            NumericField::MainMeals => self.main_meals,
            NumericField::WaterIntake => self.water_intake,
            NumericField::PhysicalActivity => self.physical_activity,
            NumericField::TechnologyUse => self.technology_use,
        }
    }

    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Gender => &self.gender,
            CategoricalField::Alcohol => &self.alcohol,
            CategoricalField::CaloricFood => &self.caloric_food,
            CategoricalField::Smoking => &self.smoking,
            CategoricalField::FamilyHistory => &self.family_history,
            CategoricalField::Snacking => &self.snacking,
            CategoricalField::Transport => &self.transport,
        }
    }

    /// Numeric values in model column order.
    pub fn numeric_values(&self) -> Vec<f64> {
        NumericField::iter().map(|field| self.numeric(field)).collect()
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        let numeric = |field| form::range(field).default;
        let categorical = |field| {
            form::options(field)
                .first()
                .copied()
                .unwrap_or_default()
                .to_owned()
        };

        Self {
            age: numeric(NumericField::Age),
            height: numeric(NumericField::Height),
            weight: numeric(NumericField::Weight),
            vegetable_frequency: numeric(NumericField::VegetableFrequency),
            main_meals: numeric(NumericField::MainMeals),
            water_intake: numeric(NumericField::WaterIntake),
            physical_activity: numeric(NumericField::PhysicalActivity),
            technology_use: numeric(NumericField::TechnologyUse),
            gender: categorical(CategoricalField::Gender),
            alcohol: categorical(CategoricalField::Alcohol),
            caloric_food: categorical(CategoricalField::CaloricFood),
            smoking: categorical(CategoricalField::Smoking),
            family_history: categorical(CategoricalField::FamilyHistory),
            snacking: categorical(CategoricalField::Snacking),
            transport: categorical(CategoricalField::Transport),
        }
    }
}

/// Who the report is about. Printed on the report, never fed to the model.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportSubject {
    pub name: String,
    pub exam_date: NaiveDate,
}

impl ReportSubject {
    pub fn new(name: impl Into<String>, exam_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            exam_date,
        }
    }
}
