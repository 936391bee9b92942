use thiserror::Error;

pub type FlexResult<T> = Result<T, FlexError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlexError {
    #[error("JSON error at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid container type '{kind}'. Expected one of: flex, bubble, carousel")]
    InvalidContainer { kind: String },

    #[error("Document has no 'type' field at the top level")]
    MissingType,

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FlexError {
    fn from(err: serde_json::Error) -> Self {
        FlexError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FlexError {
    fn from(err: serde_yaml::Error) -> Self {
        FlexError::Config(err.to_string())
    }
}

impl From<std::io::Error> for FlexError {
    fn from(err: std::io::Error) -> Self {
        FlexError::Io(err.to_string())
    }
}
