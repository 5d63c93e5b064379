use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid carrier prefix: {0:?}")]
    InvalidPrefix(String),
}
