use crate::layout::ReportField;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no coordinate for report field {0}")]
    MissingField(ReportField),
    #[error("{field} at ({x}, {y}) lies outside the {width}x{height} template")]
    OutOfBounds {
        field: ReportField,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("invalid layout setting {setting}: {reason}")]
    InvalidSetting {
        setting: &'static str,
        reason: String,
    },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse layout: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, Error>;
