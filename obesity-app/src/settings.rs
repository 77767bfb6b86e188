use std::path::PathBuf;

use clap::Parser;

/// Predict obesity categories and export PDF reports.
///
/// Every path can also be given through the environment, or a `.env` file.
#[derive(Debug, Parser)]
#[command(name = "obesity-report", version)]
pub struct Settings {
    /// Transformer bundle with the fitted encoders, scaler and classifier.
    #[arg(long, env = "OBESITY_MODEL_PATH", default_value = "obesity_model.ron")]
    pub model: PathBuf,

    /// Background image the report is drawn on.
    #[arg(long, env = "OBESITY_TEMPLATE_PATH", default_value = "Hasil.jpg")]
    pub template: PathBuf,

    /// RON file with field coordinates; the built-in layout is used if unset.
    #[arg(long, env = "OBESITY_LAYOUT_PATH")]
    pub layout: Option<PathBuf>,

    /// Preferred TrueType font; a built-in bitmap font is used if unavailable.
    #[arg(long, env = "OBESITY_FONT_PATH", default_value = "arial.ttf")]
    pub font: PathBuf,

    /// Directory receiving the PDF report.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also save the rendered raster to this path.
    #[arg(long)]
    pub image_output: Option<PathBuf>,

    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// JSON submissions to process.
    #[arg(required = true)]
    pub records: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_assets() {
        let settings = Settings::try_parse_from(["obesity-report", "form.json"]).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.image_output, None);
        assert_eq!(settings.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(settings.records, vec![PathBuf::from("form.json")]);
    }

    #[test]
    fn paths_can_be_overridden() {
        let settings = Settings::try_parse_from([
            "obesity-report",
            "--model",
            "models/v1.ron",
            "--layout",
            "layout.ron",
            "--image-output",
            "Hasil_Updated.jpg",
            "a.json",
            "b.json",
        ])
        .unwrap();
        assert_eq!(settings.model, PathBuf::from("models/v1.ron"));
        assert_eq!(settings.layout, Some(PathBuf::from("layout.ron")));
        assert_eq!(
            settings.image_output,
            Some(PathBuf::from("Hasil_Updated.jpg"))
        );
        assert_eq!(settings.records.len(), 2);
    }

    #[test]
    fn at_least_one_record_is_required() {
        assert!(Settings::try_parse_from(["obesity-report"]).is_err());
    }
}
