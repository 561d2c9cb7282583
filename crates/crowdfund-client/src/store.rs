use crate::{errors::ClientResult, ledger::Ledger, remote::CampaignRemote, types::CampaignRecord};
use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};

/// Session-scoped list of campaigns, replaced wholesale on every refresh
#[derive(Debug, Default)]
pub struct CampaignStore {
    campaigns: Vec<CampaignRecord>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch every campaign and swap it in. On error the previous snapshot
    /// stays exactly as it was.
    pub async fn refresh<L: Ledger>(&mut self, remote: &CampaignRemote<L>) -> ClientResult<usize> {
        match remote.fetch_all().await {
            Ok(campaigns) => {
                info!("Loaded {} campaign(s)", campaigns.len());
                self.campaigns = campaigns;
                Ok(self.campaigns.len())
            }
            Err(e) => {
                warn!("Campaign refresh failed, keeping previous snapshot: {}", e);
                Err(e)
            }
        }
    }

    /// Current campaigns, in the order the remote listed them
    pub fn snapshot(&self) -> &[CampaignRecord] {
        &self.campaigns
    }

    pub fn get(&self, address: &Pubkey) -> Option<&CampaignRecord> {
        self.campaigns.iter().find(|c| &c.address == address)
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}
