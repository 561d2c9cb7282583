use {
    async_trait::async_trait,
    crowdfund_client::{AgentError, SigningAgent},
    solana_sdk::{
        pubkey::Pubkey,
        signature::{Keypair, Signer as _},
        transaction::Transaction,
    },
    std::sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Signing agent whose every answer a test can script.
///
/// Defaults: installed, not yet trusted, approves connects and signatures.
pub struct TestAgent {
    keypair: Keypair,
    present: bool,
    trusted: bool,
    approve_connect: bool,
    approve_signing: AtomicBool,
    sign_requests: AtomicUsize,
}

impl Default for TestAgent {
    fn default() -> Self {
        Self::new(Keypair::new())
    }
}

impl TestAgent {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            present: true,
            trusted: false,
            approve_connect: true,
            approve_signing: AtomicBool::new(true),
            sign_requests: AtomicUsize::new(0),
        }
    }

    /// No agent installed in the host environment
    pub fn absent(mut self) -> Self {
        self.present = false;
        self
    }

    /// Agent remembers a prior approval, so silent connects succeed
    pub fn trusted(mut self) -> Self {
        self.trusted = true;
        self
    }

    /// User declines the consent prompt
    pub fn declining_connect(mut self) -> Self {
        self.approve_connect = false;
        self
    }

    /// Flip whether the user approves signature requests from here on
    pub fn set_approve_signing(&self, approve: bool) {
        self.approve_signing.store(approve, Ordering::SeqCst);
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Signature requests seen, approved or not
    pub fn sign_requests(&self) -> usize {
        self.sign_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SigningAgent for TestAgent {
    fn is_present(&self) -> bool {
        self.present
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, AgentError> {
        if !self.present {
            return Err(AgentError::Unavailable);
        }
        if only_if_trusted && !self.trusted {
            return Err(AgentError::Rejected);
        }
        if !only_if_trusted && !self.approve_connect {
            return Err(AgentError::Rejected);
        }
        Ok(self.keypair.pubkey())
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, AgentError> {
        self.sign_requests.fetch_add(1, Ordering::SeqCst);
        if !self.approve_signing.load(Ordering::SeqCst) {
            return Err(AgentError::Rejected);
        }

        let recent_blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| AgentError::Failed(e.to_string()))?;
        Ok(transaction)
    }
}
