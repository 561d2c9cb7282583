use crowdfund_client::ClientError;
use crowdfund_sdk::AmountError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Invalid public key: {0}")]
    InvalidPubkey(String),
}
