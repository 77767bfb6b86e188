use std::path::Path;

use image::{Rgb, RgbImage};
use log::{debug, info};
use obesity_model::{CategoricalField, NumericField, ObesityCategory, ReportSubject, UserRecord};
use strum::IntoEnumIterator;

use crate::{
    document::ReportArtifact,
    font::ReportFont,
    layout::{ReportField, TemplateLayout},
    recommendation::RecommendationPair,
    Result,
};

const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Burns a submission into a fixed background template.
pub struct ReportRenderer {
    template: RgbImage,
    layout: TemplateLayout,
    font: ReportFont,
}

impl ReportRenderer {
    /// Fails if `layout` misses a field or places one outside `template`.
    pub fn new(template: RgbImage, layout: TemplateLayout, font: ReportFont) -> Result<Self> {
        layout.validate(template.width(), template.height())?;
        Ok(Self {
            template,
            layout,
            font,
        })
    }

    pub fn from_file(
        template_path: impl AsRef<Path>,
        layout: TemplateLayout,
        font: ReportFont,
    ) -> Result<Self> {
        info!(
            "Loading report template from {}",
            template_path.as_ref().display()
        );
        let template = image::open(template_path)?.to_rgb8();
        Self::new(template, layout, font)
    }

    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    pub fn render(
        &self,
        subject: &ReportSubject,
        record: &UserRecord,
        category: ObesityCategory,
        recommendation: &RecommendationPair,
    ) -> RgbImage {
        let mut canvas = self.template.clone();
        for (field, text) in self.field_texts(subject, record, category, recommendation) {
            // Every field was checked against the template in `new`.
            let Ok(origin) = self.layout.position(field) else {
                continue;
            };
            debug!("Drawing {} at ({}, {})", field, origin.x, origin.y);
            let x = i32::try_from(origin.x).unwrap_or(i32::MAX);
            for (i, line) in text.lines().enumerate() {
                let offset = (i as u32).saturating_mul(self.layout.line_spacing);
                let y = i32::try_from(origin.y.saturating_add(offset)).unwrap_or(i32::MAX);
                self.font
                    .draw_text(&mut canvas, INK, x, y, self.layout.font_size, line);
            }
        }
        canvas
    }

    pub fn render_artifact(
        &self,
        subject: &ReportSubject,
        record: &UserRecord,
        category: ObesityCategory,
        recommendation: &RecommendationPair,
    ) -> Result<ReportArtifact> {
        let image = self.render(subject, record, category, recommendation);
        ReportArtifact::from_image(&image)
    }

    fn field_texts(
        &self,
        subject: &ReportSubject,
        record: &UserRecord,
        category: ObesityCategory,
        recommendation: &RecommendationPair,
    ) -> Vec<(ReportField, String)> {
        let mut texts = vec![
            (ReportField::Name, subject.name.clone()),
            (
                ReportField::Date,
                subject.exam_date.format("%Y-%m-%d").to_string(),
            ),
        ];
        texts.extend(NumericField::iter().map(|field| {
            (
                ReportField::from(field),
                numeric_text(field, record.numeric(field)),
            )
        }));
        texts.extend(CategoricalField::iter().map(|field| {
            (
                ReportField::from(field),
                record.categorical(field).to_owned(),
            )
        }));
        texts.push((ReportField::Prediction, category.label().to_owned()));
        // One wrap width for every category, taken from the layout.
        texts.push((
            ReportField::Lifestyle,
            textwrap::fill(
                &format!("Gaya Hidup: {}", recommendation.lifestyle),
                self.layout.wrap_width,
            ),
        ));
        texts.push((
            ReportField::Diet,
            textwrap::fill(
                &format!("Pola Makan: {}", recommendation.diet),
                self.layout.wrap_width,
            ),
        ));
        texts
    }
}

fn numeric_text(field: NumericField, value: f64) -> String {
    match field {
        NumericField::Age => format!("{} tahun", value),
        NumericField::Height => format!("{} cm", value),
        NumericField::Weight => format!("{} kg", value),
        NumericField::VegetableFrequency => format!("{}", value),
        NumericField::MainMeals => format!("{} kali/hari", value),
        NumericField::WaterIntake => format!("{} liter", value),
        NumericField::PhysicalActivity => format!("{} jam", value),
        NumericField::TechnologyUse => format!("{} jam/hari", value),
    }
}
