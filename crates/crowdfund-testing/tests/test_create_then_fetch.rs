use crowdfund_client::ClientError;
use crowdfund_testing::TestFixture;

/// Test create followed by refresh
///
/// Verifies the store then holds exactly one campaign at the owner's PDA, with
/// the submitted name and description, nothing donated, and the owner as admin.
#[tokio::test]
async fn test_create_then_fetch() {
    let mut test = TestFixture::new().await;

    let address = test
        .create_campaign("N", "D")
        .await
        .expect("Campaign creation should succeed");

    test.refresh().await.expect("Refresh should succeed");

    let snapshot = test.store.snapshot();
    assert_eq!(snapshot.len(), 1);
    let campaign = &snapshot[0];
    assert_eq!(campaign.address, test.campaign_address());
    assert_eq!(campaign.address, address);
    assert_eq!(campaign.name, "N");
    assert_eq!(campaign.description, "D");
    assert_eq!(campaign.amount_donated, 0);
    assert_eq!(campaign.admin, test.owner());
    assert_eq!(test.store.get(&address), Some(campaign));
}

/// Test that the single-account read agrees with the listing
#[tokio::test]
async fn test_fetch_single_campaign() {
    let test = TestFixture::new().await;

    assert_eq!(test.remote.fetch(&test.campaign_address()).await.unwrap(), None);

    let address = test.create_campaign("N", "D").await.unwrap();
    let campaign = test
        .remote
        .fetch(&address)
        .await
        .unwrap()
        .expect("Campaign should exist after create");

    assert_eq!(campaign.name, "N");
    assert_eq!(campaign.lamports, test.ledger.balance(&address));
}

/// Test that a second create for the same owner is rejected remotely
///
/// The address is derived from the owner alone, so the second create targets
/// an account that already exists. No pre-check is made: the rejection comes
/// from the ledger and the first campaign is untouched.
#[tokio::test]
async fn test_second_create_for_same_owner_fails() {
    let mut test = TestFixture::new().await;

    test.create_campaign("first", "first description")
        .await
        .expect("First create should succeed");

    let result = test.create_campaign("second", "second description").await;
    assert!(matches!(result, Err(ClientError::SubmissionFailed(_))));
    assert_eq!(test.wallet.agent().sign_requests(), 2);

    test.refresh().await.unwrap();
    assert_eq!(test.store.len(), 1);
    assert_eq!(test.store.snapshot()[0].name, "first");
}

/// Test that campaigns from several owners are all listed, in creation order
#[tokio::test]
async fn test_campaigns_from_many_owners_are_listed() {
    let mut test = TestFixture::new().await;
    let other = test.other_wallet().await;

    let mine = test.create_campaign("mine", "").await.unwrap();
    let theirs = test.remote.create(&other, "theirs", "").await.unwrap();

    test.refresh().await.unwrap();
    let addresses: Vec<_> = test.store.snapshot().iter().map(|c| c.address).collect();
    assert_eq!(addresses, vec![mine, theirs]);
    assert_eq!(test.store.get(&theirs).unwrap().admin, other.identity().unwrap());
}
