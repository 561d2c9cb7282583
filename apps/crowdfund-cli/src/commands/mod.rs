pub mod campaign_address;
pub mod connect;
pub mod create_campaign;
pub mod donate;
pub mod list_campaigns;
pub mod withdraw;

use crate::{config::CliConfig, error::CliResult, keypair_agent::KeypairAgent};
use crowdfund_client::{CampaignRemote, CampaignStore, RpcLedger, WalletSession};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

/// Everything a subcommand needs, built once from the resolved config
pub struct AppContext {
    pub remote: CampaignRemote<RpcLedger>,
    pub wallet: WalletSession<KeypairAgent>,
    pub store: CampaignStore,
}

impl AppContext {
    pub fn new(config: &CliConfig, auto_approve: bool) -> Self {
        debug!(
            "Using {} with program {}",
            config.client.rpc_url(),
            config.client.program_id
        );

        let remote = CampaignRemote::with_address_finder(
            RpcLedger::from_config(&config.client),
            config.client.address_finder(),
        );
        let agent = KeypairAgent::new(config.keypair_path.clone(), config.trusted, auto_approve);

        Self {
            remote,
            wallet: WalletSession::new(agent),
            store: CampaignStore::new(),
        }
    }

    /// Reconnect silently if the agent allows it, otherwise ask
    pub async fn connect(&mut self) -> CliResult<Pubkey> {
        if let Some(identity) = self.wallet.connect_silently().await {
            return Ok(identity);
        }
        Ok(self.wallet.connect_interactive().await?)
    }
}
