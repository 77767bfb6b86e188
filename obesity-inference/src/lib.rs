pub mod bundle;
pub mod classifier;
pub mod encoder;
mod error;
pub mod scaler;

use obesity_model::{ObesityCategory, UserRecord};

pub use bundle::{TransformerBundle, BUNDLE_VERSION};
pub use error::{Error, Result};

/// Turns a submitted record into an obesity category.
#[mockall::automock]
pub trait Predictor: Send + Sync {
    fn predict(&self, record: &UserRecord) -> Result<ObesityCategory>;
}
