use clap::{Parser, Subcommand};
use crowdfund_client::Cluster;
use crowdfund_sdk::DEFAULT_DONATION_SOL;
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use std::{path::PathBuf, str::FromStr};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod keypair_agent;

use commands::AppContext;
use config::CliConfig;
use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Crowdfund CLI - Create, fund and withdraw from campaigns on Solana")]
#[command(version)]
struct Cli {
    /// YAML config file (defaults to ~/.config/crowdfund/config.yml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cluster moniker (devnet, testnet, mainnet-beta, localnet) or RPC URL
    #[arg(short = 'u', long = "url", global = true)]
    cluster: Option<Cluster>,

    /// Keypair file used to sign
    #[arg(short, long, global = true)]
    keypair: Option<PathBuf>,

    /// Crowdfund program id
    #[arg(long, global = true, value_parser = parse_pubkey)]
    program_id: Option<Pubkey>,

    /// Approve connect and signing prompts without asking
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect the wallet and print its public key
    Connect,

    /// Print the campaign address owned by a wallet
    Address {
        /// Owner public key (defaults to the connected wallet)
        #[arg(short, long, value_parser = parse_pubkey)]
        owner: Option<Pubkey>,
    },

    /// Create the connected wallet's campaign
    Create {
        #[arg(short, long, default_value = "campaign name")]
        name: String,

        #[arg(short, long, default_value = "campaign description")]
        description: String,
    },

    /// List every campaign
    List,

    /// Donate SOL to a campaign
    Donate {
        /// Campaign address
        #[arg(value_parser = parse_pubkey)]
        campaign: Pubkey,

        /// Amount in SOL
        #[arg(short, long, default_value_t = DEFAULT_DONATION_SOL)]
        amount: Decimal,
    },

    /// Withdraw SOL from a campaign you own
    Withdraw {
        /// Campaign address
        #[arg(value_parser = parse_pubkey)]
        campaign: Pubkey,

        /// Amount in SOL
        #[arg(short, long, default_value_t = DEFAULT_DONATION_SOL)]
        amount: Decimal,
    },
}

fn parse_pubkey(input: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(input).map_err(|e| CliError::InvalidPubkey(format!("{input}: {e}")))
}

#[tokio::main]
async fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(
        cli.cluster,
        cli.keypair,
        cli.program_id,
    );
    let mut ctx = AppContext::new(&config, cli.yes);

    match cli.command {
        Commands::Connect => commands::connect::execute(&mut ctx).await,

        Commands::Address { owner } => commands::campaign_address::execute(&mut ctx, owner).await,

        Commands::Create { name, description } => {
            commands::create_campaign::execute(&mut ctx, name, description).await
        }

        Commands::List => commands::list_campaigns::execute(&mut ctx).await,

        Commands::Donate { campaign, amount } => {
            commands::donate::execute(&mut ctx, campaign, amount).await
        }

        Commands::Withdraw { campaign, amount } => {
            commands::withdraw::execute(&mut ctx, campaign, amount).await
        }
    }
}
