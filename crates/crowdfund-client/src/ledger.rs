/*!
# Ledger Gateway

The remote side of every crowdfund operation: list program accounts, read one
account, and submit a signed transaction. `RpcLedger` speaks JSON-RPC to a
cluster; tests substitute an in-memory ledger.
*/

use crate::config::ClientConfig;
use async_trait::async_trait;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
    signature::Signature, transaction::Transaction,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Rejected: {0}")]
    Rejected(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Every account owned by `program_id`, in node order
    async fn get_program_accounts(&self, program_id: &Pubkey)
        -> LedgerResult<Vec<(Pubkey, Account)>>;

    /// `None` when no account exists at `address`
    async fn get_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>>;

    async fn latest_blockhash(&self) -> LedgerResult<Hash>;

    /// Submit a signed transaction and wait for it to land. Sent once.
    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature>;
}

/// `Ledger` over a Solana JSON-RPC endpoint
pub struct RpcLedger {
    rpc_client: Arc<RpcClient>,
    send_config: RpcSendTransactionConfig,
}

impl RpcLedger {
    pub fn new(rpc_url: String) -> Self {
        Self::from_config(&ClientConfig {
            cluster: crate::config::Cluster::Custom(rpc_url),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let rpc_client = RpcClient::new_with_commitment(
            config.rpc_url().to_string(),
            config.commitment_config(),
        );

        Self::with_rpc_client(Arc::new(rpc_client), config)
    }

    pub fn with_rpc_client(rpc_client: Arc<RpcClient>, config: &ClientConfig) -> Self {
        let send_config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(config.preflight_commitment),
            ..RpcSendTransactionConfig::default()
        };

        Self {
            rpc_client,
            send_config,
        }
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.rpc_client.commitment()
    }

    /// Get the RPC client (for advanced operations)
    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> LedgerResult<Vec<(Pubkey, Account)>> {
        let accounts = self.rpc_client.get_program_accounts(program_id).await?;
        debug!("getProgramAccounts({}) returned {}", program_id, accounts.len());
        Ok(accounts)
    }

    async fn get_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>> {
        let response = self
            .rpc_client
            .get_account_with_commitment(address, self.rpc_client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn latest_blockhash(&self) -> LedgerResult<Hash> {
        Ok(self.rpc_client.get_latest_blockhash().await?)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        let signature = self
            .rpc_client
            .send_and_confirm_transaction_with_spinner_and_config(
                transaction,
                self.rpc_client.commitment(),
                self.send_config,
            )
            .await?;

        debug!("https://explorer.solana.com/tx/{}", signature);
        Ok(signature)
    }
}
