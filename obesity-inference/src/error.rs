#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown category \"{value}\" for field {field}")]
    UnknownCategory { field: String, value: String },
    #[error("class index {0} has no label")]
    UnknownClass(usize),
    #[error("label \"{0}\" is not an obesity category")]
    UnknownLabel(String),
    #[error("expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("no encoder for categorical field {0}")]
    MissingEncoder(String),
    #[error("invalid encoder for {field}: {reason}")]
    InvalidEncoder { field: String, reason: String },
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("unsupported bundle version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("cannot read bundle: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse bundle: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, Error>;
