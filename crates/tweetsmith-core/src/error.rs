use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweetsmithError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Category registry error: {0}")]
    Registry(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid option {option:?} for category {category}")]
    InvalidOption { category: String, option: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TweetsmithError>;
