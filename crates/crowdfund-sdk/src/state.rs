use anchor_lang::prelude::*;

/// On-chain campaign record, as laid out by the crowdfund program.
///
/// Data is the 8-byte `account:Campaign` discriminator followed by the Borsh
/// encoding of these fields. The program allocates more space than the fields
/// need, so decoders must tolerate trailing bytes.
#[account] // seed [CAMPAIGN_SEED_PREFIX, admin]
#[derive(Debug, PartialEq, Eq)]
pub struct Campaign {
    /// The wallet that created the campaign and may withdraw from it.
    pub admin: Pubkey,

    pub name: String,

    pub description: String,

    /// Running total in lamports.
    pub amount_donated: u64,
}

impl Campaign {
    /// Serialized length of this record, discriminator included.
    pub fn serialized_len(&self) -> usize {
        8 + 32 + (4 + self.name.len()) + (4 + self.description.len()) + 8
    }
}
