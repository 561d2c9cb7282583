use crowdfund_sdk::{parse_sol, sol_to_lamports, DEFAULT_DONATION_SOL};
use crowdfund_testing::{TestFixture, QUARTER_SOL, TEST_WALLET_LAMPORTS};

/// Test donating a quarter SOL to a fresh campaign
///
/// amount_donated goes from 0 to 250_000_000 and the lamports actually move
/// from the donor to the campaign account.
#[tokio::test]
async fn test_donate_quarter_sol() {
    let mut test = TestFixture::new().await;
    let address = test.create_campaign("N", "D").await.unwrap();
    let donor = test.other_wallet().await;
    let donor_key = donor.identity().unwrap();

    let amount = sol_to_lamports(DEFAULT_DONATION_SOL).unwrap();
    assert_eq!(amount, QUARTER_SOL);

    let campaign_balance_before = test.ledger.balance(&address);
    test.remote
        .donate(&donor, &address, amount)
        .await
        .expect("Donation should succeed");

    test.refresh().await.unwrap();
    let campaign = test.store.get(&address).unwrap();
    assert_eq!(campaign.amount_donated, 250_000_000);
    assert_eq!(campaign.lamports, campaign_balance_before + amount);
    assert_eq!(test.ledger.balance(&donor_key), TEST_WALLET_LAMPORTS - amount);
}

/// Test that donations accumulate: X + Y after each donate
#[tokio::test]
async fn test_donations_accumulate() {
    let mut test = TestFixture::new().await;
    let address = test.create_campaign("N", "D").await.unwrap();

    let mut expected = 0;
    for amount in [QUARTER_SOL, QUARTER_SOL, parse_sol("1.5").unwrap(), 1] {
        test.remote
            .donate(&test.wallet, &address, amount)
            .await
            .expect("Donation should succeed");
        expected += amount;

        test.refresh().await.unwrap();
        assert_eq!(test.store.get(&address).unwrap().amount_donated, expected);
    }
}

/// Test that a donation larger than the donor's balance is rejected
#[tokio::test]
async fn test_donate_insufficient_funds() {
    let mut test = TestFixture::new().await;
    let address = test.create_campaign("N", "D").await.unwrap();

    let result = test
        .remote
        .donate(&test.wallet, &address, TEST_WALLET_LAMPORTS * 2)
        .await;
    assert!(matches!(
        result,
        Err(crowdfund_client::ClientError::SubmissionFailed(_))
    ));

    test.refresh().await.unwrap();
    assert_eq!(test.store.get(&address).unwrap().amount_donated, 0);
}
