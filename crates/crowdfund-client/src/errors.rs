use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No signing agent is available")]
    AgentUnavailable,

    #[error("Request rejected by the user")]
    UserRejected,

    #[error("Wallet is not connected")]
    NotConnected,

    #[error("Transaction submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Fetching program accounts failed: {0}")]
    FetchFailed(String),

    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
