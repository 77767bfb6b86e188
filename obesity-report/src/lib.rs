pub mod document;
mod error;
pub mod font;
pub mod layout;
pub mod recommendation;
pub mod render;

pub use document::{encode_pdf, page_count, ReportArtifact, REPORT_FILE_NAME};
pub use error::{Error, Result};
pub use font::ReportFont;
pub use layout::{Point, ReportField, TemplateLayout};
pub use recommendation::{recommend, recommend_label, RecommendationPair};
pub use render::ReportRenderer;
