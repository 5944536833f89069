use anchor_lang::prelude::*;

// 8 discriminator + 32 owner + 8 index + 8 amount + 2 monthly_rate_bps
// + 1 duration_months + 1 status + 8 created_at + 8 start_time + 8 end_time + 1 bump
pub const STAKE_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 2 + 1 + 1 + 8 + 8 + 8 + 1;

/// Forward-only stake lifecycle. A Pending stake has reserved its terms but
/// holds no funds; funding moves it to Active in the same transaction the
/// deposit lands, and maturity flips it to Completed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum StakeStatus {
    Pending = 0,
    Active = 1,
    Completed = 2,
}

#[account]
pub struct Stake {
    pub owner: Pubkey,
    /// Position in the owner's stake sequence; part of the PDA seed.
    pub index: u64,
    pub amount: u64,
    /// Rate and duration snapshot from config at creation time; later
    /// config changes never touch an existing stake's terms.
    pub monthly_rate_bps: u16,
    pub duration_months: u8,
    pub status: StakeStatus,
    pub created_at: i64,
    /// Set at funding time; accrual runs from here.
    pub start_time: i64,
    /// start_time + duration_months accrual months.
    pub end_time: i64,
    pub bump: u8,
}
