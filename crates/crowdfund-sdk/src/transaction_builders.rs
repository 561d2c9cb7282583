/*!
# Transaction Builders

Unsigned transactions for crowdfund operations. The fee payer is always the
wallet that signs; nothing here touches RPC or key material, so the caller
supplies the blockhash and hands the result to a signer.
*/

use crate::{build_create_ix, build_donate_ix, build_withdraw_ix, AddressFinder};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};

/// Wrap instructions in an unsigned transaction paid for by `payer`
pub fn build_unsigned_tx(
    instructions: &[Instruction],
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> Transaction {
    let message = Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash);
    Transaction::new_unsigned(message)
}

pub fn build_create_tx(
    address_finder: &AddressFinder,
    user: &Pubkey,
    name: String,
    description: String,
    recent_blockhash: Hash,
) -> Transaction {
    let (ix, _, _) = build_create_ix(address_finder, *user, name, description);
    build_unsigned_tx(&[ix], user, recent_blockhash)
}

pub fn build_donate_tx(
    address_finder: &AddressFinder,
    user: &Pubkey,
    campaign: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> Transaction {
    let (ix, _, _) = build_donate_ix(address_finder, *user, *campaign, amount);
    build_unsigned_tx(&[ix], user, recent_blockhash)
}

pub fn build_withdraw_tx(
    address_finder: &AddressFinder,
    user: &Pubkey,
    campaign: &Pubkey,
    amount: u64,
    recent_blockhash: Hash,
) -> Transaction {
    let (ix, _, _) = build_withdraw_ix(address_finder, *user, *campaign, amount);
    build_unsigned_tx(&[ix], user, recent_blockhash)
}
