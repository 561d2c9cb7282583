use async_trait::async_trait;
use crowdfund_client::{AgentError, SigningAgent};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer as _},
    transaction::Transaction,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Signing agent backed by a Solana keypair file on this machine.
///
/// The keypair is read from disk on every request and never kept. Consent is
/// a y/N prompt on the terminal unless `auto_approve` is set.
pub struct KeypairAgent {
    keypair_path: PathBuf,
    trusted: bool,
    auto_approve: bool,
}

impl KeypairAgent {
    pub fn new(keypair_path: PathBuf, trusted: bool, auto_approve: bool) -> Self {
        Self {
            keypair_path,
            trusted,
            auto_approve,
        }
    }

    fn load_keypair(&self) -> Result<Keypair, AgentError> {
        if !self.is_present() {
            return Err(AgentError::Unavailable);
        }
        read_keypair_file(&self.keypair_path).map_err(|e| {
            AgentError::Failed(format!(
                "failed to read keypair {}: {}",
                self.keypair_path.display(),
                e
            ))
        })
    }

    async fn confirm(&self, question: &str) -> Result<bool, AgentError> {
        if self.auto_approve {
            return Ok(true);
        }

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{question} [y/N] ").as_bytes())
            .await
            .map_err(prompt_failed)?;
        stdout.flush().await.map_err(prompt_failed)?;

        let mut answer = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut answer)
            .await
            .map_err(prompt_failed)?;

        Ok(is_yes(&answer))
    }
}

fn prompt_failed(e: std::io::Error) -> AgentError {
    AgentError::Failed(format!("prompt failed: {e}"))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl SigningAgent for KeypairAgent {
    fn is_present(&self) -> bool {
        self.keypair_path.is_file()
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, AgentError> {
        if only_if_trusted && !self.trusted {
            return Err(AgentError::Rejected);
        }

        let pubkey = self.load_keypair()?.pubkey();
        if !only_if_trusted && !self.confirm(&format!("Connect wallet {pubkey}?")).await? {
            return Err(AgentError::Rejected);
        }
        Ok(pubkey)
    }

    async fn sign_transaction(
        &self,
        mut transaction: Transaction,
    ) -> Result<Transaction, AgentError> {
        let keypair = self.load_keypair()?;

        let question = format!(
            "Sign transaction with {} instruction(s) as {}?",
            transaction.message.instructions.len(),
            keypair.pubkey()
        );
        if !self.confirm(&question).await? {
            return Err(AgentError::Rejected);
        }

        let recent_blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[&keypair], recent_blockhash)
            .map_err(|e| AgentError::Failed(e.to_string()))?;
        Ok(transaction)
    }
}
