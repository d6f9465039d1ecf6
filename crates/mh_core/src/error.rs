use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("trial count must be at least {minimum}, got {requested}")]
    TooFewTrials { requested: u64, minimum: u64 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
