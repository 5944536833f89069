use anchor_lang::prelude::*;

/// Commission levels paid up the referrer chain.
pub const REFERRAL_LEVELS: usize = 5;

// 8 (discriminator) +
// 32 (authority) +
// 32 (payout_authority) +
// 8 (min_stake) +
// 8 (max_stake) +
// 2 (monthly_rate_bps) +
// 1 (duration_months) +
// 1 (withdrawal_day) +
// 2 * 5 (referral_rates_bps) +
// 1 (bump) =
// 103 total bytes
pub const STAKING_CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 2 + 1 + 1 + 2 * REFERRAL_LEVELS + 1;

#[account]
pub struct StakingConfig {
    pub authority: Pubkey,
    pub payout_authority: Pubkey,
    pub min_stake: u64,
    pub max_stake: u64,
    /// Monthly reward rate in basis points (800 = 8%).
    pub monthly_rate_bps: u16,
    /// Accrual duration; rewards cap here.
    pub duration_months: u8,
    /// Day of month on which withdrawals are accepted.
    pub withdrawal_day: u8,
    /// Commission per referral depth, basis points of the referred stake.
    pub referral_rates_bps: [u16; REFERRAL_LEVELS],
    pub bump: u8,
}
