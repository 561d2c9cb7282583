use super::AppContext;
use crate::error::CliResult;
use solana_sdk::pubkey::Pubkey;

/// Print the campaign address of `owner`, or of the connected wallet
pub async fn execute(ctx: &mut AppContext, owner: Option<Pubkey>) -> CliResult<()> {
    let owner = match owner {
        Some(owner) => owner,
        None => ctx.connect().await?,
    };

    let (campaign, bump) = ctx.remote.address_finder().find_campaign_address(&owner);
    println!("Owner:    {owner}");
    println!("Campaign: {campaign} (bump {bump})");
    Ok(())
}
