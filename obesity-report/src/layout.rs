//! Where each report field is drawn on the template.
//!
//! The coordinates live in the template's pixel space. A layout is only
//! meaningful for templates whose dimensions it has been validated against.

use std::{collections::BTreeMap, fs, path::Path};

use log::info;
use obesity_model::{CategoricalField, NumericField};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{Error, Result};

#[derive(
    Clone, Copy, Debug, Display, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub enum ReportField {
    Name,
    Date,
    Age,
    Height,
    Weight,
    VegetableFrequency,
    MainMeals,
    WaterIntake,
    PhysicalActivity,
    TechnologyUse,
    Gender,
    Alcohol,
    CaloricFood,
    Smoking,
    FamilyHistory,
    Snacking,
    Transport,
    Prediction,
    Lifestyle,
    Diet,
}

impl From<NumericField> for ReportField {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::Age => ReportField::Age,
            NumericField::Height => ReportField::Height,
            NumericField::Weight => ReportField::Weight,
            NumericField::VegetableFrequency => ReportField::VegetableFrequency,
            NumericField::MainMeals => ReportField::MainMeals,
            NumericField::WaterIntake => ReportField::WaterIntake,
            NumericField::PhysicalActivity => ReportField::PhysicalActivity,
            NumericField::TechnologyUse => ReportField::TechnologyUse,
        }
    }
}

impl From<CategoricalField> for ReportField {
    fn from(field: CategoricalField) -> Self {
        match field {
            CategoricalField::Gender => ReportField::Gender,
            CategoricalField::Alcohol => ReportField::Alcohol,
            CategoricalField::CaloricFood => ReportField::CaloricFood,
            CategoricalField::Smoking => ReportField::Smoking,
            CategoricalField::FamilyHistory => ReportField::FamilyHistory,
            CategoricalField::Snacking => ReportField::Snacking,
            CategoricalField::Transport => ReportField::Transport,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateLayout {
    pub font_size: f32,
    /// Vertical distance between wrapped lines, in pixels.
    pub line_spacing: u32,
    /// Maximum characters per line for recommendation texts.
    pub wrap_width: usize,
    pub fields: BTreeMap<ReportField, Point>,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        let fields = [
            (ReportField::Name, Point::new(400, 295)),
            (ReportField::Date, Point::new(400, 350)),
            (ReportField::Age, Point::new(610, 630)),
            (ReportField::Height, Point::new(610, 690)),
            (ReportField::Weight, Point::new(610, 740)),
            (ReportField::VegetableFrequency, Point::new(610, 790)),
            (ReportField::MainMeals, Point::new(610, 850)),
            (ReportField::WaterIntake, Point::new(610, 900)),
            (ReportField::PhysicalActivity, Point::new(610, 950)),
            (ReportField::TechnologyUse, Point::new(610, 1010)),
            (ReportField::Gender, Point::new(610, 1070)),
            (ReportField::Alcohol, Point::new(610, 1120)),
            (ReportField::CaloricFood, Point::new(610, 1170)),
            (ReportField::Smoking, Point::new(610, 1220)),
            (ReportField::FamilyHistory, Point::new(610, 1280)),
            (ReportField::Snacking, Point::new(610, 1330)),
            (ReportField::Transport, Point::new(610, 1390)),
            (ReportField::Prediction, Point::new(150, 1480)),
            (ReportField::Lifestyle, Point::new(150, 1580)),
            (ReportField::Diet, Point::new(150, 1650)),
        ];

        Self {
            font_size: 24.0,
            line_spacing: 30,
            wrap_width: 75,
            fields: fields.into_iter().collect(),
        }
    }
}

impl TemplateLayout {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        info!("Loading template layout from {}", path.as_ref().display());
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn position(&self, field: ReportField) -> Result<Point> {
        self.fields
            .get(&field)
            .copied()
            .ok_or(Error::MissingField(field))
    }

    /// Check that every report field has a coordinate inside a
    /// `width` x `height` template, and that the text settings fit it too.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 || self.font_size > height as f32 {
            return Err(Error::InvalidSetting {
                setting: "font_size",
                reason: format!("{} is not within (0, {}]", self.font_size, height),
            });
        }
        if self.line_spacing > height {
            return Err(Error::InvalidSetting {
                setting: "line_spacing",
                reason: format!("{} exceeds the template height {}", self.line_spacing, height),
            });
        }
        if self.wrap_width == 0 {
            return Err(Error::InvalidSetting {
                setting: "wrap_width",
                reason: "must be positive".to_owned(),
            });
        }

        for field in ReportField::iter() {
            let Point { x, y } = self.position(field)?;
            if x >= width || y >= height {
                return Err(Error::OutOfBounds {
                    field,
                    x,
                    y,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_covers_every_field() {
        let layout = TemplateLayout::default();
        for (i, field) in ReportField::iter().enumerate() {
            assert!(layout.position(field).is_ok(), "Test case #{}", i);
        }
    }

    #[test]
    fn default_layout_fits_a4_template() {
        assert!(TemplateLayout::default().validate(1240, 1754).is_ok());
    }

    #[test]
    fn coordinates_outside_template_are_rejected() {
        match TemplateLayout::default().validate(1240, 1600) {
            Err(Error::OutOfBounds { field, y, .. }) => {
                assert_eq!(field, ReportField::Diet);
                assert_eq!(y, 1650);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn text_settings_are_checked() {
        let test_data: [(fn(&mut TemplateLayout), &str); 7] = [
            (|l| l.font_size = 0.0, "font_size"),
            (|l| l.font_size = -12.0, "font_size"),
            (|l| l.font_size = f32::NAN, "font_size"),
            (|l| l.font_size = f32::INFINITY, "font_size"),
            (|l| l.font_size = 1.0e12, "font_size"),
            (|l| l.line_spacing = 3_000_000_000, "line_spacing"),
            (|l| l.wrap_width = 0, "wrap_width"),
        ];

        for (i, (tweak, expected)) in test_data.into_iter().enumerate() {
            let mut layout = TemplateLayout::default();
            tweak(&mut layout);
            match layout.validate(1240, 1754) {
                Err(Error::InvalidSetting { setting, .. }) => {
                    assert_eq!(setting, expected, "Test case #{}", i)
                }
                other => panic!("Test case #{}: unexpected {:?}", i, other),
            }
        }
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut layout = TemplateLayout::default();
        layout.fields.remove(&ReportField::Smoking);
        assert!(matches!(
            layout.validate(1240, 1754),
            Err(Error::MissingField(ReportField::Smoking))
        ));
    }

    #[test]
    fn shipped_layout_matches_default() {
        let shipped = TemplateLayout::from_ron_str(include_str!("../../layout.ron")).unwrap();
        assert_eq!(shipped, TemplateLayout::default());
    }

    #[test]
    fn layout_round_trips_through_ron() {
        let layout = TemplateLayout::default();
        let text = ron::ser::to_string_pretty(&layout, Default::default()).unwrap();
        assert_eq!(TemplateLayout::from_ron_str(&text).unwrap(), layout);
    }

    #[test]
    fn every_record_field_maps_to_a_report_field() {
        let numeric: Vec<ReportField> = NumericField::iter().map(Into::into).collect();
        let categorical: Vec<ReportField> = CategoricalField::iter().map(Into::into).collect();
        assert_eq!(numeric.len() + categorical.len(), 15);
        assert_eq!(numeric[0], ReportField::Age);
        assert_eq!(categorical[6], ReportField::Transport);
    }
}
