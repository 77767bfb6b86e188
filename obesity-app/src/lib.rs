mod error;
pub mod settings;
pub mod submission;

use image::RgbImage;
use log::{debug, info};
use obesity_inference::Predictor;
use obesity_model::ObesityCategory;
use obesity_report::{recommend, RecommendationPair, ReportArtifact, ReportRenderer};

pub use error::{Error, Result};
pub use settings::Settings;
pub use submission::Submission;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct Outcome {
    pub category: ObesityCategory,
    pub recommendation: RecommendationPair,
    pub image: RgbImage,
    pub artifact: ReportArtifact,
}

/// Runs a submission through prediction, recommendation lookup and
/// report rendering. Assets are loaded once and shared across runs.
pub struct Pipeline {
    predictor: Box<dyn Predictor>,
    renderer: ReportRenderer,
}

impl Pipeline {
    pub fn new(predictor: Box<dyn Predictor>, renderer: ReportRenderer) -> Self {
        Self {
            predictor,
            renderer,
        }
    }

    pub fn run(&self, submission: &Submission) -> Result<Outcome> {
        info!("Predicting obesity category for \"{}\"", submission.name);
        debug!("{:?}", submission.record);
        let category = self.predictor.predict(&submission.record)?;
        info!("Predicted {}", category);

        let recommendation = recommend(category);

        info!("Rendering report");
        let image = self.renderer.render(
            &submission.subject(),
            &submission.record,
            category,
            &recommendation,
        );
        let artifact = ReportArtifact::from_image(&image)?;
        info!("Encoded report as {} bytes", artifact.bytes.len());

        Ok(Outcome {
            category,
            recommendation,
            image,
            artifact,
        })
    }
}
