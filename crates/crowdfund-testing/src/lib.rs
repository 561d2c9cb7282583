/*!
# Crowdfund Testing

Test harness for the crowdfund client: an in-memory ledger that plays the
crowdfund program's rules, a scriptable signing agent, and a fixture that wires
them to a `CampaignRemote`, `WalletSession` and `CampaignStore`.
*/

mod simulated_ledger;
mod test_agent;
mod test_fixture;

pub use simulated_ledger::{SimulatedLedger, CAMPAIGN_ACCOUNT_SPACE};
pub use test_agent::TestAgent;
pub use test_fixture::TestFixture;

use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Standard test constants
pub const TEST_WALLET_LAMPORTS: u64 = 100 * LAMPORTS_PER_SOL;
pub const QUARTER_SOL: u64 = LAMPORTS_PER_SOL / 4; // the CLI's default donation
