//! Instruction arguments for the crowdfund program.
//!
//! Each discriminator is `sha256("global:<instruction name>")[..8]`.

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Create {
    pub name: String,
    pub description: String,
}

impl Discriminator for Create {
    const DISCRIMINATOR: &'static [u8] = &[24, 30, 200, 40, 5, 28, 7, 119];
}

impl InstructionData for Create {}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Donate {
    pub amount: u64,
}

impl Discriminator for Donate {
    const DISCRIMINATOR: &'static [u8] = &[121, 186, 218, 211, 73, 70, 196, 180];
}

impl InstructionData for Donate {}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdraw {
    pub amount: u64,
}

impl Discriminator for Withdraw {
    const DISCRIMINATOR: &'static [u8] = &[183, 18, 70, 156, 148, 109, 161, 34];
}

impl InstructionData for Withdraw {}
