use super::{list_campaigns, AppContext};
use crate::error::CliResult;
use crowdfund_sdk::sol_to_lamports;
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

pub async fn execute(ctx: &mut AppContext, campaign: Pubkey, amount: Decimal) -> CliResult<()> {
    let lamports = sol_to_lamports(amount)?;
    ctx.connect().await?;

    let signature = ctx.remote.donate(&ctx.wallet, &campaign, lamports).await?;
    println!("✅ Donated {amount} SOL to {campaign}");
    println!("Signature: {signature}");

    list_campaigns::execute(ctx).await
}
