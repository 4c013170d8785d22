use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteAtlasError {
    #[error("Invalid locations file: {0}")]
    InvalidInput(String),

    #[error("State not recognized: {0}")]
    UnknownState(String),

    #[error("Record is missing required field '{0}'")]
    MissingField(String),

    #[error("{kind} '{name}' not found in registry")]
    NotFound { kind: &'static str, name: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
