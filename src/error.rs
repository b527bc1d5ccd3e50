use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensoError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("parameter '{0}' is declared more than once")]
    DuplicateParameter(String),

    #[error("invalid value '{value}' for '{name}': expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("preencha todos os campos: {0}")]
    IncompleteQuery(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A view whose last request ended in the failed state
    #[error("{0}")]
    FetchFailed(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CensoError>;
