pub mod category;
pub mod form;
pub mod record;

pub use category::ObesityCategory;
pub use record::{CategoricalField, NumericField, ReportSubject, UserRecord};
