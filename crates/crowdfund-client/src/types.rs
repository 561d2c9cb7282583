/*!
# Client Data Types

Typed views over campaign accounts as returned by `getProgramAccounts`.
*/

use anchor_lang::AccountDeserialize;
use crowdfund_sdk::Campaign;
use solana_sdk::{account::Account, pubkey::Pubkey};

/// A decoded campaign account. A snapshot: the program may have moved on
/// by the time the caller looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRecord {
    /// PDA of the campaign, also its identity
    pub address: Pubkey,
    /// Creator of the campaign
    pub admin: Pubkey,
    pub name: String,
    pub description: String,
    /// Lamports donated, net of withdrawals
    pub amount_donated: u64,
    /// Raw account balance, rent reserve included
    pub lamports: u64,
}

impl CampaignRecord {
    /// Decode a program-owned account using the `Campaign` layout
    pub fn decode(address: Pubkey, account: &Account) -> Result<Self, DecodeSkipped> {
        let campaign = Campaign::try_deserialize(&mut account.data.as_slice()).map_err(|e| {
            DecodeSkipped {
                address,
                reason: e.to_string(),
            }
        })?;

        Ok(Self::from_campaign(address, campaign, account.lamports))
    }

    pub fn from_campaign(address: Pubkey, campaign: Campaign, lamports: u64) -> Self {
        Self {
            address,
            admin: campaign.admin,
            name: campaign.name,
            description: campaign.description,
            amount_donated: campaign.amount_donated,
            lamports,
        }
    }
}

/// An account the listing could not decode and left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSkipped {
    pub address: Pubkey,
    pub reason: String,
}

/// Result of one full `getProgramAccounts` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignListing {
    /// Decoded campaigns, in the order the node returned them
    pub campaigns: Vec<CampaignRecord>,
    pub skipped: Vec<DecodeSkipped>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AccountSerialize;

    fn account_with(data: Vec<u8>, lamports: u64) -> Account {
        Account {
            lamports,
            data,
            owner: crowdfund_sdk::PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        }
    }

    #[test]
    fn test_decode_campaign_account() {
        let admin = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let mut data = Vec::new();
        Campaign {
            admin,
            name: "N".to_string(),
            description: "D".to_string(),
            amount_donated: 5,
        }
        .try_serialize(&mut data)
        .unwrap();
        data.resize(256, 0);

        let record = CampaignRecord::decode(address, &account_with(data, 1_000)).unwrap();
        assert_eq!(record.address, address);
        assert_eq!(record.admin, admin);
        assert_eq!(record.name, "N");
        assert_eq!(record.description, "D");
        assert_eq!(record.amount_donated, 5);
        assert_eq!(record.lamports, 1_000);
    }

    #[test]
    fn test_decode_garbage_reports_address() {
        let address = Pubkey::new_unique();
        let skipped = CampaignRecord::decode(address, &account_with(vec![1, 2, 3], 0)).unwrap_err();
        assert_eq!(skipped.address, address);
        assert!(!skipped.reason.is_empty());
    }
}
