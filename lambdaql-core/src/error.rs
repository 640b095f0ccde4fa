#[derive(thiserror::Error, Debug)]
pub enum LambdaqlError {
    #[error("There was no event, so we don't know what to do")]
    MalformedInvocation,
    #[error("None of the event shapes contained a query")]
    UnrecognizedInvocationShape,
    #[error("Request body has no usable query")]
    MissingQuery,
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LambdaqlError>;
