use anchor_lang::prelude::*;

// 8 discriminator + 32 owner + 32 destination + 8 amount + 4 month_index
// + 1 status + 8 requested_at + 8 completed_at + 1 bump
pub const WITHDRAWAL_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 4 + 1 + 8 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pending = 0,
    Completed = 1,
}

/// One withdrawal request, PDA-keyed by (owner, calendar month). The seed
/// is the once-per-month guarantee: a second non-failed request in the same
/// month cannot even create its account. A failed withdrawal is closed,
/// releasing the month slot for a retry.
#[account]
pub struct Withdrawal {
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub month_index: u32,
    pub status: WithdrawalStatus,
    pub requested_at: i64,
    pub completed_at: i64,
    pub bump: u8,
}
