use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("Transaction simulation failed: {0}")]
    SimulationFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
