use crate::{accounts, instruction, AddressFinder};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData as _;

/// Build the `create` instruction for `user`'s campaign PDA.
pub fn build_create_ix(
    address_finder: &AddressFinder,
    user: Pubkey,
    name: String,
    description: String,
) -> (Instruction, accounts::Create, instruction::Create) {
    let (campaign, _) = address_finder.find_campaign_address(&user);

    let ix_accounts = accounts::Create {
        campaign,
        user,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::Create { name, description };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    (ix, ix_accounts, ix_data)
}

pub fn build_donate_ix(
    address_finder: &AddressFinder,
    user: Pubkey,
    campaign: Pubkey,
    amount: u64,
) -> (Instruction, accounts::Donate, instruction::Donate) {
    let ix_accounts = accounts::Donate {
        campaign,
        user,
        system_program: address_finder.system_program_id,
    };

    let ix_data = instruction::Donate { amount };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    (ix, ix_accounts, ix_data)
}

pub fn build_withdraw_ix(
    address_finder: &AddressFinder,
    user: Pubkey,
    campaign: Pubkey,
    amount: u64,
) -> (Instruction, accounts::Withdraw, instruction::Withdraw) {
    let ix_accounts = accounts::Withdraw { campaign, user };

    let ix_data = instruction::Withdraw { amount };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    (ix, ix_accounts, ix_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;

    #[test]
    fn test_create_ix_targets_owner_pda() {
        let finder = AddressFinder::default();
        let user = Pubkey::new_unique();

        let (ix, ix_accounts, ix_data) =
            build_create_ix(&finder, user, "N".to_string(), "D".to_string());

        assert_eq!(ix.program_id, crate::ID);
        assert_eq!(ix_accounts.campaign, finder.find_campaign_address(&user).0);
        assert_eq!(ix.accounts.len(), 3);
        assert!(ix.accounts[0].is_writable && !ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, user);
        assert!(ix.accounts[1].is_writable && ix.accounts[1].is_signer);
        assert_eq!(ix.accounts[2].pubkey, finder.system_program_id);
        assert!(!ix.accounts[2].is_writable);
        assert_eq!(ix_data.name, "N");
        assert_eq!(&ix.data[..8], instruction::Create::DISCRIMINATOR);
    }

    #[test]
    fn test_donate_ix_accounts() {
        let finder = AddressFinder::default();
        let user = Pubkey::new_unique();
        let campaign = Pubkey::new_unique();

        let (ix, _, ix_data) = build_donate_ix(&finder, user, campaign, 42);

        assert_eq!(ix_data.amount, 42);
        assert_eq!(ix.accounts[0].pubkey, campaign);
        assert_eq!(ix.accounts[1].pubkey, user);
        assert_eq!(ix.accounts[2].pubkey, finder.system_program_id);
        assert_eq!(&ix.data[..8], instruction::Donate::DISCRIMINATOR);
    }

    #[test]
    fn test_withdraw_ix_has_no_system_program() {
        let finder = AddressFinder::default();
        let user = Pubkey::new_unique();
        let campaign = Pubkey::new_unique();

        let (ix, _, _) = build_withdraw_ix(&finder, user, campaign, 7);

        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0].pubkey, campaign);
        assert!(ix.accounts[1].is_signer);
        assert_eq!(&ix.data[..8], instruction::Withdraw::DISCRIMINATOR);
    }
}
