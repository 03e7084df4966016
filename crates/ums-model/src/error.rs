use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown gender: {0:?} (expected male, female or other)")]
    UnknownGender(String),
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
