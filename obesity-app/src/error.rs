#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("prediction failed: {0}")]
    Inference(#[from] obesity_inference::Error),
    #[error("report failed: {0}")]
    Report(#[from] obesity_report::Error),
    #[error("cannot read submission: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid submission: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
