use super::AppContext;
use crate::error::CliResult;

pub async fn execute(ctx: &mut AppContext) -> CliResult<()> {
    let identity = ctx.connect().await?;
    println!("Connected with public key: {identity}");
    Ok(())
}
