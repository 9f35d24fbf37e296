use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid tree parameters: {0}")]
    InvalidTreeParams(String),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),
}
