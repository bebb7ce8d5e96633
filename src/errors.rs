use thiserror::Error;

/// Error type that captures failures in the external collaborators. The state
/// transition itself never fails; only persistence and rate ingestion can.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Rate source error: {0}")]
    RateSource(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Storage(err.to_string())
    }
}
