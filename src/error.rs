use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UtilError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot use negative luminosity ({0})")]
    NegativeLuminosity(f64),

    #[error("cannot import color {0}")]
    ColorImport(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, UtilError>;

impl UtilError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        UtilError::InvalidArgument(message.into())
    }
}
