use anchor_lang::prelude::*;

// 8 (discriminator) +
// 32 (payout_authority) +
// 32 (management_authority) +
// 32 (upgrade_authority) +
// 2 (protocol_fee_bps) +
// 8 (min_participants) +
// 8 (raffle_counter) +
// 1 (bump) =
// 123 total bytes
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 2 + 8 + 8 + 1;

#[account]
pub struct Config {
    pub payout_authority: Pubkey,
    pub management_authority: Pubkey,
    pub upgrade_authority: Pubkey,
    /// Protocol fee retained from each completed raffle's pool, in basis points.
    pub protocol_fee_bps: u16,
    /// Default minimum unique participants required to draw instead of auto-cancel.
    pub min_participants: u64,
    pub raffle_counter: u64,
    pub bump: u8,
}
