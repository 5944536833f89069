use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        entry::Entry,
        raffle::{Raffle, RaffleStatus},
        TicketPosition, Treasury, ENTRY_ACCOUNT_SIZE,
    },
};

/// Event emitted when tickets are purchased
#[event]
pub struct TicketsPurchased {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Number of tickets purchased
    pub ticket_count: u64,
    /// Total amount paid in lamports
    pub payment_amount: u64,
    /// Starting ticket index for this purchase
    pub ticket_start_index: u64,
    /// True when this purchase is the buyer's first in the raffle
    pub first_entry: bool,
    /// The seed that was used to create the entry
    pub entry_seed: [u8; 8],
}

/// Instruction to purchase tickets for a raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_count` - The number of tickets to purchase
/// * `entry_seed` - Client-chosen idempotency key; a reused seed cannot
///   create a second entry for the same raffle
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates ticket count is greater than 0
/// 2. Rejects purchases outside the entry window, on paused raffles, and on
///    raffles past the Active state (a raffle in Drawing or beyond never
///    accepts entries)
/// 3. Rejects purchases that would push the buyer's cumulative position past
///    the per-participant limit
/// 4. Ensures buyer has sufficient funds to cover the payment
/// 5. Verifies the treasury account matches the one stored in raffle
///
/// # Implementation Notes
/// - The payment transfer and all counter updates happen in one atomic
///   transaction; concurrent purchases against the same raffle are
///   serialized by the runtime's account locking, so the running totals can
///   never be corrupted by a race
/// - `total_participants` is bumped only on a buyer's first purchase
/// - Uses checked arithmetic operations to prevent overflow
pub fn buy_tickets(ctx: Context<BuyTickets>, ticket_count: u64, entry_seed: [u8; 8]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts.raffle.is_open_for_entries(now),
        RaffleError::RaffleNotOpen
    );

    require!(
        ctx.accounts.treasury.key() == ctx.accounts.raffle.treasury.key(),
        RaffleError::InvalidTreasury,
    );

    require!(
        ctx.accounts.ticket_position.owner == ctx.accounts.signer.key(),
        RaffleError::PositionNotInitialized,
    );

    // All counter updates and the per-participant limit live in one place;
    // a failed purchase leaves both the raffle and the position untouched
    let receipt = ctx
        .accounts
        .raffle
        .apply_purchase(&mut ctx.accounts.ticket_position, ticket_count)?;

    require!(
        ctx.accounts.signer.lamports() >= receipt.payment_amount,
        RaffleError::InsufficientFunds,
    );

    // Initialize entry data in the PDA.
    // Each entry is an immutable record of a single purchase transaction.
    let entry = &mut ctx.accounts.entry;
    entry.raffle = ctx.accounts.raffle.key();
    entry.buyer = ctx.accounts.signer.key();
    entry.ticket_count = ticket_count;
    entry.ticket_start_index = receipt.ticket_start_index;
    entry.amount_paid = receipt.payment_amount;
    entry.purchased_at = now;
    entry.seed = entry_seed;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    // Transfer lamports from the buyer to the raffle treasury
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.signer.key(),
            &ctx.accounts.treasury.key(),
            receipt.payment_amount,
        ),
        &[
            ctx.accounts.signer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    // Verify the transfer was successful by checking treasury balance
    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(receipt.payment_amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(TicketsPurchased {
        raffle: ctx.accounts.raffle.key(),
        buyer: ctx.accounts.signer.key(),
        ticket_count,
        payment_amount: receipt.payment_amount,
        ticket_start_index: receipt.ticket_start_index,
        first_entry: receipt.first_entry,
        entry_seed,
    });

    Ok(())
}

/// Accounts required for the buy_tickets instruction
#[derive(Accounts)]
#[instruction(ticket_count: u64, entry_seed: [u8; 8])]
pub struct BuyTickets<'info> {
    /// The raffle account that tickets are being purchased for
    #[account(
        mut,
        constraint = raffle.status == RaffleStatus::Active @ RaffleError::RaffleNotOpen,
        constraint = !raffle.paused @ RaffleError::RafflePaused,
        constraint = Clock::get()?.unix_timestamp < raffle.end_time @ RaffleError::RaffleEnded,
    )]
    pub raffle: Account<'info, Raffle>,

    /// New entry account created for this purchase
    /// PDA with seeds ["entry", raffle_key, entry_seed]
    #[account(
        init,
        payer = signer,
        space = ENTRY_ACCOUNT_SIZE,
        seeds = [
            b"entry",
            raffle.key().as_ref(),
            entry_seed.as_ref()
        ],
        bump,
    )]
    pub entry: Account<'info, Entry>,

    /// Buyer's cumulative position
    /// PDA with seeds ["ticket_position", raffle_key, signer_key]
    #[account(
        mut,
        seeds = [
            b"ticket_position",
            raffle.key().as_ref(),
            signer.key().as_ref()
        ],
        bump = ticket_position.bump
    )]
    pub ticket_position: Account<'info, TicketPosition>,

    /// The account purchasing tickets and paying for the entry account
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Required for creating the entry account
    pub system_program: Program<'info, System>,

    /// Treasury account that receives payment for tickets
    /// PDA with seeds ["treasury", raffle_key]
    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
