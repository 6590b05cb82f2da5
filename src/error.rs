use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to parse type descriptor: {0}")]
    ParseError(String),

    #[error("Type descriptor must not be null")]
    InvalidArgument,

    #[error("Failed to serialize schema: {0}")]
    Serialization(String),
}
