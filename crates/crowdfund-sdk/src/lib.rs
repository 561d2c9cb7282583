pub mod accounts;
mod address_finder;
pub mod amounts;
pub mod instruction;
mod instruction_builders;
mod state;
mod transaction_builders;

pub use address_finder::AddressFinder;
pub use amounts::{lamports_to_sol, parse_sol, sol_to_lamports, AmountError, DEFAULT_DONATION_SOL};
pub use instruction_builders::*;
pub use state::*;
pub use transaction_builders::*;

use anchor_lang::prelude::*;

declare_id!("Bhw3VHBAGiqKrAgPdSjG1oJVd4psHvfQfY5EieWP3b14");

/// Domain-separation tag for campaign PDAs: `[CAMPAIGN_SEED_PREFIX, owner]`
pub const CAMPAIGN_SEED_PREFIX: &[u8] = b"CAMPAIGN_DEMO";

// Re-export program ID
pub use crate::ID as PROGRAM_ID;
