use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Manifest error: {0}")]
    Manifest(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
