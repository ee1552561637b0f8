use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontlineError {
    #[error("Unknown profile key: {0}")]
    UnknownProfile(String),

    #[error("Unknown equipment template: {0}")]
    UnknownTemplate(String),

    #[error("Invalid combat rating: {0}")]
    InvalidRating(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FrontlineError>;
