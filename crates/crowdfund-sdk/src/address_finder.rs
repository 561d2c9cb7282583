use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;

use crate::{CAMPAIGN_SEED_PREFIX, ID as CROWDFUND_PROGRAM_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFinder {
    pub program_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, system_program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id,
        }
    }

    /// Finder for a deployment of the program at a non-default address
    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self::new(program_id, SYSTEM_PROGRAM_ID)
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Campaign PDA for `owner`. One campaign per owner: the seed carries no
    /// other disambiguator, so a second create for the same owner collides.
    pub fn find_campaign_address(&self, owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CAMPAIGN_SEED_PREFIX, owner.as_ref()], &self.program_id)
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(CROWDFUND_PROGRAM_ID, SYSTEM_PROGRAM_ID)
    }
}
