use crowdfund_client::AddressFinder;
use crowdfund_testing::TestFixture;
use solana_sdk::pubkey::Pubkey;

/// Test that a campaign address is a pure function of its owner
///
/// The remote's derivation, a fresh finder (another session) and the address
/// `create` returns must all agree.
#[tokio::test]
async fn test_campaign_address_is_deterministic() {
    let test = TestFixture::new().await;
    let owner = test.owner();

    let first = test.remote.campaign_address(&owner);
    let second = test.remote.campaign_address(&owner);
    assert_eq!(first, second);

    let next_session = AddressFinder::default();
    assert_eq!(next_session.find_campaign_address(&owner).0, first);

    let created = test
        .create_campaign("N", "D")
        .await
        .expect("Campaign creation should succeed");
    assert_eq!(created, first);
}

/// Test that distinct owners never share a campaign address
#[tokio::test]
async fn test_campaign_addresses_unique_across_owners() {
    let test = TestFixture::new().await;

    let mut addresses: Vec<Pubkey> = (0..256)
        .map(|_| test.remote.campaign_address(&Pubkey::new_unique()))
        .collect();
    addresses.push(test.campaign_address());
    addresses.sort();
    addresses.dedup();

    assert_eq!(addresses.len(), 257);
}
