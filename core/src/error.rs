use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown role '{name}'")]
    UnknownRole { name: String },

    #[error("Unknown stage '{name}'")]
    UnknownStage { name: String },

    #[error("No baseline configured for role '{role}'")]
    MissingBaseline { role: String },

    #[error("Invalid band [{lo}, {hi}] for '{field}'")]
    InvalidBand { field: String, lo: f64, hi: f64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
