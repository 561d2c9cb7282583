/*!
# Crowdfund Client

Client side of the crowdfund program: discover campaigns, fund them, and
withdraw from your own. Keys never pass through this crate; signing goes to a
[`SigningAgent`].

## Components

- **[`WalletSession`]**: connection lifecycle with the signing agent
  (silent reconnect, explicit connect, current identity)
- **[`CampaignRemote`]**: builds and submits `create` / `donate` / `withdraw`,
  and lists and decodes campaign accounts
- **[`CampaignStore`]**: in-memory snapshot of all campaigns, rebuilt on refresh
- **[`Ledger`]**: the cluster, as seen by the remote; [`RpcLedger`] in production

Address derivation lives in `crowdfund_sdk::AddressFinder`.

## Usage

```rust,no_run
use crowdfund_client::{
    CampaignRemote, CampaignStore, ClientConfig, ClientResult, RpcLedger, SigningAgent,
    WalletSession,
};

async fn example<A: SigningAgent>(agent: A) -> ClientResult<()> {
    let config = ClientConfig::default();
    let remote = CampaignRemote::with_address_finder(
        RpcLedger::from_config(&config),
        config.address_finder(),
    );
    let mut wallet = WalletSession::new(agent);
    let mut store = CampaignStore::new();

    if wallet.connect_silently().await.is_none() {
        wallet.connect_interactive().await?;
    }

    let campaign = remote.create(&wallet, "campaign name", "campaign description").await?;
    remote.donate(&wallet, &campaign, 250_000_000).await?;

    store.refresh(&remote).await?;
    for campaign in store.snapshot() {
        println!("{}: {} lamports", campaign.name, campaign.amount_donated);
    }
    Ok(())
}
```
*/

pub mod config;
pub mod errors;
pub mod ledger;
pub mod remote;
pub mod store;
pub mod types;
pub mod wallet;

// Re-export main types for convenience
pub use config::{ClientConfig, Cluster};
pub use errors::{ClientError, ClientResult};
pub use ledger::{Ledger, LedgerError, LedgerResult, RpcLedger};
pub use remote::CampaignRemote;
pub use store::CampaignStore;
pub use types::{CampaignListing, CampaignRecord, DecodeSkipped};
pub use wallet::{AgentError, ConnectionState, SigningAgent, WalletSession};

pub use crowdfund_sdk::{AddressFinder, PROGRAM_ID};
