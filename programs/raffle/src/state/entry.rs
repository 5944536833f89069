use anchor_lang::prelude::*;

// 8 discriminator + 32 raffle + 32 buyer + 8 ticket_count + 8 ticket_start_index
// + 8 amount_paid + 8 purchased_at + 8 seed
pub const ENTRY_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8;

/// Immutable record of one ticket purchase. The PDA seed doubles as the
/// idempotency key: a reused seed cannot create a second entry.
#[account]
pub struct Entry {
    pub raffle: Pubkey,
    pub buyer: Pubkey,
    pub ticket_count: u64,
    /// First ticket index of this purchase's contiguous range.
    pub ticket_start_index: u64,
    pub amount_paid: u64,
    pub purchased_at: i64,
    pub seed: [u8; 8],
}
