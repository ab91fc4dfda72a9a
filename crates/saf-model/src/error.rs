use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafError {
    /// A field name outside the recognized catalogs was read or written.
    #[error("invalid field '{name}'")]
    InvalidField { name: String },
}

impl SafError {
    pub fn invalid_field(name: impl Into<String>) -> Self {
        Self::InvalidField { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, SafError>;
