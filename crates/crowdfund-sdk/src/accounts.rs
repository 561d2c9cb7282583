//! Account lists for each crowdfund instruction, in program order.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Create {
    pub campaign: Pubkey,
    pub user: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Create {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.campaign, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Donate {
    pub campaign: Pubkey,
    pub user: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for Donate {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.campaign, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdraw {
    pub campaign: Pubkey,
    pub user: Pubkey,
}

impl ToAccountMetas for Withdraw {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.campaign, false),
            AccountMeta::new(self.user, true),
        ]
    }
}
