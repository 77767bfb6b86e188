use std::error::Error;

use clap::Parser;
use dotenv::dotenv;
use log::info;

use obesity_app::{Pipeline, Settings, Submission};
use obesity_inference::TransformerBundle;
use obesity_report::{ReportFont, ReportRenderer, TemplateLayout};

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let settings = Settings::parse();
    log4rs::init_file(&settings.log_config, Default::default())?;

    let bundle = TransformerBundle::load(&settings.model)?;
    let layout = match &settings.layout {
        Some(path) => TemplateLayout::load(path)?,
        None => TemplateLayout::default(),
    };
    let font = ReportFont::load_or_default(&settings.font);
    let renderer = ReportRenderer::from_file(&settings.template, layout, font)?;
    let pipeline = Pipeline::new(Box::new(bundle), renderer);

    for path in &settings.records {
        let submission = Submission::from_file(path)?;
        let outcome = pipeline.run(&submission)?;

        println!("Tingkat Obesitas: {}", outcome.category);
        println!("Gaya Hidup: {}", outcome.recommendation.lifestyle);
        println!("Pola Makan: {}", outcome.recommendation.diet);

        if let Some(image_path) = &settings.image_output {
            outcome.image.save(image_path)?;
            info!("Rendered image saved to {}", image_path.display());
        }
        let written = outcome.artifact.write_to_dir(&settings.output_dir)?;
        info!("Report written to {}", written.display());
    }

    Ok(())
}
