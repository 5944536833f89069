use anchor_lang::prelude::*;

// 8 discriminator + 1 bump
pub const REWARDS_VAULT_ACCOUNT_SIZE: usize = 8 + 1;

/// Lamport-holding PDA for all stake deposits and reward payouts.
#[account]
pub struct RewardsVault {
    pub bump: u8,
}
