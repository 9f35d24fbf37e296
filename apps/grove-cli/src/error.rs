use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Client error: {0}")]
    Client(#[from] grove_client::ClientError),

    #[error("SDK error: {0}")]
    Sdk(#[from] grove_sdk::SdkError),

    #[error("Invalid keypair file: {0}")]
    InvalidKeypair(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
