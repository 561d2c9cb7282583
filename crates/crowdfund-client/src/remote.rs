/*!
# Campaign Remote

Translates campaign intents into signed transactions against the crowdfund
program, and program accounts back into `CampaignRecord`s.

Every mutating call is sent at most once. Whatever the agent or the cluster
says no to comes back as `SubmissionFailed`; deciding whether to try again is
the caller's business. Authorization (who may withdraw, how much) is enforced by
the program alone.
*/

use crate::{
    errors::{ClientError, ClientResult},
    ledger::Ledger,
    types::{CampaignListing, CampaignRecord},
    wallet::{SigningAgent, WalletSession},
};
use crowdfund_sdk::{
    build_create_ix, build_donate_ix, build_unsigned_tx, build_withdraw_ix, AddressFinder,
};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, signature::Signature};
use tracing::{debug, info, warn};

pub struct CampaignRemote<L> {
    address_finder: AddressFinder,
    ledger: L,
}

impl<L: Ledger> CampaignRemote<L> {
    pub fn new(ledger: L) -> Self {
        Self::with_address_finder(ledger, AddressFinder::default())
    }

    pub fn with_address_finder(ledger: L, address_finder: AddressFinder) -> Self {
        Self {
            address_finder,
            ledger,
        }
    }

    // ================================================================================================
    // Mutating Operations
    // ================================================================================================

    /// Create the connected wallet's campaign and return its address.
    ///
    /// No existence check is made first: a wallet that already owns a
    /// campaign gets `SubmissionFailed` back from the program.
    pub async fn create<A: SigningAgent>(
        &self,
        wallet: &WalletSession<A>,
        name: &str,
        description: &str,
    ) -> ClientResult<Pubkey> {
        let owner = wallet.require_identity()?;
        let (ix, ix_accounts, _) = build_create_ix(
            &self.address_finder,
            owner,
            name.to_string(),
            description.to_string(),
        );

        self.submit(wallet, owner, ix).await?;
        info!("Created a new campaign with address: {}", ix_accounts.campaign);
        Ok(ix_accounts.campaign)
    }

    /// Move `amount` lamports from the connected wallet into `campaign`
    pub async fn donate<A: SigningAgent>(
        &self,
        wallet: &WalletSession<A>,
        campaign: &Pubkey,
        amount: u64,
    ) -> ClientResult<Signature> {
        let owner = wallet.require_identity()?;
        require_positive(amount)?;

        let (ix, _, _) = build_donate_ix(&self.address_finder, owner, *campaign, amount);
        let signature = self.submit(wallet, owner, ix).await?;
        info!("Donated {} lamports to: {}", amount, campaign);
        Ok(signature)
    }

    /// Ask the program to pay `amount` lamports out of `campaign` to the
    /// connected wallet. Only the program decides whether that is allowed.
    pub async fn withdraw<A: SigningAgent>(
        &self,
        wallet: &WalletSession<A>,
        campaign: &Pubkey,
        amount: u64,
    ) -> ClientResult<Signature> {
        let owner = wallet.require_identity()?;
        require_positive(amount)?;

        let (ix, _, _) = build_withdraw_ix(&self.address_finder, owner, *campaign, amount);
        let signature = self.submit(wallet, owner, ix).await?;
        info!("Withdrew {} lamports from: {}", amount, campaign);
        Ok(signature)
    }

    async fn submit<A: SigningAgent>(
        &self,
        wallet: &WalletSession<A>,
        owner: Pubkey,
        ix: Instruction,
    ) -> ClientResult<Signature> {
        let recent_blockhash = self
            .ledger
            .latest_blockhash()
            .await
            .map_err(|e| ClientError::SubmissionFailed(e.to_string()))?;

        let tx = build_unsigned_tx(&[ix], &owner, recent_blockhash);
        debug!(
            "Requesting signature from {} for {} instruction(s)",
            owner,
            tx.message.instructions.len()
        );

        let signed = wallet
            .sign(tx)
            .await
            .map_err(|e| ClientError::SubmissionFailed(e.to_string()))?;

        self.ledger.send_transaction(&signed).await.map_err(|e| {
            warn!("Transaction from {} failed: {}", owner, e);
            ClientError::SubmissionFailed(e.to_string())
        })
    }

    // ================================================================================================
    // Read Path
    // ================================================================================================

    /// Every campaign the program owns that decodes cleanly
    pub async fn fetch_all(&self) -> ClientResult<Vec<CampaignRecord>> {
        Ok(self.fetch_listing().await?.campaigns)
    }

    /// Like `fetch_all`, but also reports the accounts that were left out
    pub async fn fetch_listing(&self) -> ClientResult<CampaignListing> {
        let accounts = self
            .ledger
            .get_program_accounts(self.address_finder.program_id())
            .await
            .map_err(|e| ClientError::FetchFailed(e.to_string()))?;

        let mut listing = CampaignListing::default();
        for (address, account) in &accounts {
            match CampaignRecord::decode(*address, account) {
                Ok(record) => listing.campaigns.push(record),
                Err(skipped) => {
                    warn!("Skipping account {}: {}", skipped.address, skipped.reason);
                    listing.skipped.push(skipped);
                }
            }
        }

        debug!(
            "Decoded {} of {} program accounts",
            listing.campaigns.len(),
            accounts.len()
        );
        Ok(listing)
    }

    /// Read a single campaign. `None` when nothing lives at `address`.
    pub async fn fetch(&self, address: &Pubkey) -> ClientResult<Option<CampaignRecord>> {
        let account = self
            .ledger
            .get_account(address)
            .await
            .map_err(|e| ClientError::FetchFailed(e.to_string()))?;

        let Some(account) = account else {
            return Ok(None);
        };

        if account.owner != self.address_finder.program_id {
            return Err(ClientError::InvalidAccountData(format!(
                "{} is owned by {}, not the crowdfund program",
                address, account.owner
            )));
        }

        CampaignRecord::decode(*address, &account)
            .map(Some)
            .map_err(|skipped| ClientError::InvalidAccountData(skipped.reason))
    }

    // ================================================================================================
    // Utility Methods
    // ================================================================================================

    /// Campaign address for `owner`
    pub fn campaign_address(&self, owner: &Pubkey) -> Pubkey {
        self.address_finder.find_campaign_address(owner).0
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    pub fn program_id(&self) -> &Pubkey {
        self.address_finder.program_id()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

fn require_positive(amount: u64) -> ClientResult<()> {
    if amount == 0 {
        return Err(ClientError::InvalidAmount(
            "amount must be at least one lamport".to_string(),
        ));
    }
    Ok(())
}
