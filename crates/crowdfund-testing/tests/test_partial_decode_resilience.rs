use anchor_lang::{AccountSerialize, Discriminator};
use crowdfund_sdk::Campaign;
use crowdfund_testing::TestFixture;
use solana_sdk::pubkey::Pubkey;

/// Test that one malformed program account does not abort the listing
///
/// Two real campaigns plus three accounts the layout cannot decode: garbage,
/// a foreign discriminator, and a campaign body truncated mid-string. The
/// listing returns both campaigns and reports exactly the three bad accounts.
#[tokio::test]
async fn test_malformed_accounts_are_skipped() {
    let mut test = TestFixture::new().await;
    let other = test.other_wallet().await;

    let first = test.create_campaign("first", "ok").await.unwrap();

    let garbage = Pubkey::new_unique();
    test.ledger.insert_program_account(garbage, vec![0xde, 0xad, 0xbe, 0xef]);

    let foreign = Pubkey::new_unique();
    test.ledger
        .insert_program_account(foreign, [&[7u8; 8][..], &[0u8; 64][..]].concat());

    let truncated = Pubkey::new_unique();
    let mut data = Vec::new();
    Campaign {
        admin: Pubkey::new_unique(),
        name: "a name that will be cut short".to_string(),
        description: String::new(),
        amount_donated: 0,
    }
    .try_serialize(&mut data)
    .unwrap();
    data.truncate(Campaign::DISCRIMINATOR.len() + 32 + 4 + 3);
    test.ledger.insert_program_account(truncated, data);

    let second = test.remote.create(&other, "second", "ok").await.unwrap();

    let listing = test.remote.fetch_listing().await.expect("Listing should succeed");
    let decoded: Vec<_> = listing.campaigns.iter().map(|c| c.address).collect();
    let skipped: Vec<_> = listing.skipped.iter().map(|s| s.address).collect();
    assert_eq!(decoded, vec![first, second]);
    assert_eq!(skipped, vec![garbage, foreign, truncated]);

    // The store sees the same decoded subset
    assert_eq!(test.refresh().await.unwrap(), 2);
    assert!(test.store.get(&garbage).is_none());
}

/// Test that the single-account read reports a malformed account as an error
#[tokio::test]
async fn test_fetch_malformed_account_errors() {
    let test = TestFixture::new().await;
    let garbage = Pubkey::new_unique();
    test.ledger.insert_program_account(garbage, vec![1, 2, 3]);

    let result = test.remote.fetch(&garbage).await;
    assert!(matches!(
        result,
        Err(crowdfund_client::ClientError::InvalidAccountData(_))
    ));
}
