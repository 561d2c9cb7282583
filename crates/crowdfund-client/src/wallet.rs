/*!
# Wallet Session

Connection lifecycle against an external signing agent. The agent holds the
keys; the session only remembers which identity it connected as and asks the
agent to sign on that identity's behalf.

```text
Disconnected --connect_silently (trusted)--> Connected
Disconnected --connect_silently (failed)---> Disconnected
Disconnected --connect_interactive---------> Connected | error
Connected    --disconnect------------------> Disconnected
```
*/

use crate::errors::{ClientError, ClientResult};
use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Signing agent is not available")]
    Unavailable,

    #[error("Request rejected by the user")]
    Rejected,

    #[error("Signing agent failed: {0}")]
    Failed(String),
}

/// An external component that holds private keys and approves signing
#[async_trait]
pub trait SigningAgent: Send + Sync {
    /// Whether an agent is installed in this environment at all
    fn is_present(&self) -> bool;

    /// Connect and return the agent's public key. With `only_if_trusted` the
    /// agent must not prompt: it either already trusts this client or fails.
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, AgentError>;

    /// Return `transaction` with the agent's signature applied
    async fn sign_transaction(&self, transaction: Transaction) -> Result<Transaction, AgentError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(Pubkey),
}

pub struct WalletSession<A> {
    agent: A,
    state: ConnectionState,
    identity_tx: watch::Sender<Option<Pubkey>>,
}

impl<A: SigningAgent> WalletSession<A> {
    pub fn new(agent: A) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self {
            agent,
            state: ConnectionState::Disconnected,
            identity_tx,
        }
    }

    /// Best-effort reconnect for an agent that already trusts us. Never
    /// prompts and never fails: problems are logged and yield `None`.
    pub async fn connect_silently(&mut self) -> Option<Pubkey> {
        if let ConnectionState::Connected(identity) = self.state {
            return Some(identity);
        }

        if !self.agent.is_present() {
            warn!("No signing agent found");
            return None;
        }

        match self.agent.connect(true).await {
            Ok(identity) => {
                self.set_connected(identity);
                Some(identity)
            }
            Err(e) => {
                warn!("Silent connect declined: {}", e);
                None
            }
        }
    }

    /// Ask the agent for consent and connect
    pub async fn connect_interactive(&mut self) -> ClientResult<Pubkey> {
        if !self.agent.is_present() {
            return Err(ClientError::AgentUnavailable);
        }

        match self.agent.connect(false).await {
            Ok(identity) => {
                self.set_connected(identity);
                Ok(identity)
            }
            Err(AgentError::Rejected) => Err(ClientError::UserRejected),
            Err(AgentError::Unavailable) => Err(ClientError::AgentUnavailable),
            Err(AgentError::Failed(reason)) => {
                warn!("Signing agent failed to connect: {}", reason);
                Err(ClientError::AgentUnavailable)
            }
        }
    }

    pub fn disconnect(&mut self) {
        if let ConnectionState::Connected(identity) = self.state {
            info!("Disconnected wallet {}", identity);
        }
        self.state = ConnectionState::Disconnected;
        self.identity_tx.send_replace(None);
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn identity(&self) -> Option<Pubkey> {
        match self.state {
            ConnectionState::Connected(identity) => Some(identity),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn require_identity(&self) -> ClientResult<Pubkey> {
        self.identity().ok_or(ClientError::NotConnected)
    }

    /// Watch the connected identity; receivers see every connect and disconnect
    pub fn subscribe(&self) -> watch::Receiver<Option<Pubkey>> {
        self.identity_tx.subscribe()
    }

    /// Have the agent sign `transaction` as the connected identity
    pub async fn sign(&self, transaction: Transaction) -> Result<Transaction, AgentError> {
        if self.identity().is_none() {
            return Err(AgentError::Unavailable);
        }

        let signed = self.agent.sign_transaction(transaction).await?;
        if signed.signatures.is_empty() || !signed.is_signed() {
            return Err(AgentError::Failed(
                "agent returned an unsigned transaction".to_string(),
            ));
        }
        Ok(signed)
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    fn set_connected(&mut self, identity: Pubkey) {
        info!("Connected with public key: {}", identity);
        self.state = ConnectionState::Connected(identity);
        self.identity_tx.send_replace(Some(identity));
    }
}
