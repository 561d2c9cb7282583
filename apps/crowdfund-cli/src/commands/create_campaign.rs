use super::AppContext;
use crate::error::CliResult;

pub async fn execute(ctx: &mut AppContext, name: String, description: String) -> CliResult<()> {
    ctx.connect().await?;

    let campaign = ctx.remote.create(&ctx.wallet, &name, &description).await?;
    println!("✅ Created campaign {campaign}");
    Ok(())
}
