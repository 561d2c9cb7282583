use {
    crate::{SimulatedLedger, TestAgent, TEST_WALLET_LAMPORTS},
    crowdfund_client::{CampaignRemote, CampaignStore, ClientResult, WalletSession},
    crowdfund_sdk::AddressFinder,
    solana_sdk::pubkey::Pubkey,
};

/// A connected, funded wallet pointed at a fresh simulated ledger
pub struct TestFixture {
    pub ledger: SimulatedLedger,
    pub remote: CampaignRemote<SimulatedLedger>,
    pub wallet: WalletSession<TestAgent>,
    pub store: CampaignStore,
}

impl TestFixture {
    pub async fn new() -> Self {
        let mut test = Self::with_agent(TestAgent::default().trusted());
        test.wallet
            .connect_silently()
            .await
            .expect("trusted test agent should connect silently");
        test
    }

    /// Fixture around `agent`, funded but not connected
    pub fn with_agent(agent: TestAgent) -> Self {
        let address_finder = AddressFinder::default();
        let ledger = SimulatedLedger::new(address_finder);
        ledger.airdrop(&agent.pubkey(), TEST_WALLET_LAMPORTS);

        Self {
            remote: CampaignRemote::with_address_finder(ledger.clone(), address_finder),
            ledger,
            wallet: WalletSession::new(agent),
            store: CampaignStore::new(),
        }
    }

    /// The fixture wallet's public key, connected or not
    pub fn owner(&self) -> Pubkey {
        self.wallet.agent().pubkey()
    }

    pub fn campaign_address(&self) -> Pubkey {
        self.remote.campaign_address(&self.owner())
    }

    /// A second funded, connected wallet on the same ledger
    pub async fn other_wallet(&self) -> WalletSession<TestAgent> {
        let agent = TestAgent::default();
        self.ledger.airdrop(&agent.pubkey(), TEST_WALLET_LAMPORTS);

        let mut wallet = WalletSession::new(agent);
        wallet
            .connect_interactive()
            .await
            .expect("test agent approves connects by default");
        wallet
    }

    pub async fn create_campaign(&self, name: &str, description: &str) -> ClientResult<Pubkey> {
        self.remote.create(&self.wallet, name, description).await
    }

    pub async fn refresh(&mut self) -> ClientResult<usize> {
        self.store.refresh(&self.remote).await
    }
}
