use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid ledger data: {0}")]
    InvalidLedger(#[from] serde_json::Error),

    #[error("Action log not found at {path} (run `huella init`)")]
    NotInitialized { path: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid action ID: {0}")]
    InvalidId(String),
}
