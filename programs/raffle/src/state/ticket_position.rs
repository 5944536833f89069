use anchor_lang::prelude::*;

// 8 discriminator + 32 raffle + 32 owner + 8 ticket_count + 8 total_paid + 1 bump
pub const TICKET_POSITION_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1;

/// Per-participant cumulative position in one raffle. Enforces the
/// max-tickets-per-participant limit and carries the refundable amount.
/// Closed when the position is refunded after a cancellation.
#[account]
pub struct TicketPosition {
    pub raffle: Pubkey,
    pub owner: Pubkey,
    pub ticket_count: u64,
    pub total_paid: u64,
    pub bump: u8,
}
