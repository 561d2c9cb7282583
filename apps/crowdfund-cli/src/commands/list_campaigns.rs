use super::AppContext;
use crate::error::CliResult;
use crowdfund_sdk::lamports_to_sol;

pub async fn execute(ctx: &mut AppContext) -> CliResult<()> {
    ctx.store.refresh(&ctx.remote).await?;

    if ctx.store.is_empty() {
        println!("No campaigns found");
        return Ok(());
    }

    println!("📋 {} campaign(s)", ctx.store.len());
    for campaign in ctx.store.snapshot() {
        println!();
        println!("Campaign:    {}", campaign.address);
        println!("Balance:     {} SOL", lamports_to_sol(campaign.lamports));
        println!("Donated:     {} SOL", lamports_to_sol(campaign.amount_donated));
        println!("Name:        {}", campaign.name);
        println!("Description: {}", campaign.description);
    }
    Ok(())
}
