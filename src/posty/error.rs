use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostyError {
    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostyError>;
