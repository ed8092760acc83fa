use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown strategy '{name}' (expected 'avalanche' or 'snowball')")]
    UnknownStrategy { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
