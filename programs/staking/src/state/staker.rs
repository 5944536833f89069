use anchor_lang::prelude::*;

// 8 discriminator + 32 owner + 8 stake_count + 8 total_staked + 8 total_withdrawn + 1 bump
pub const STAKER_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + 1;

/// Per-owner aggregate. `stake_count` seeds the next stake PDA and
/// `total_withdrawn` carries the lifetime reservation against which the
/// available balance is computed.
#[account]
pub struct Staker {
    pub owner: Pubkey,
    pub stake_count: u64,
    pub total_staked: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}
