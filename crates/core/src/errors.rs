use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Source error: {0}")]
    Source(#[from] eyre::Report),
}

pub type GridResult<T> = Result<T, GridError>;
