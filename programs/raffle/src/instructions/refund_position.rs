use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleStatus, TicketPosition, Treasury},
};

/// Event emitted when a cancelled raffle position is refunded
#[event]
pub struct PositionRefunded {
    pub raffle: Pubkey,
    pub owner: Pubkey,
    pub refund_amount: u64,
}

/// Instruction to refund a participant's full position after cancellation
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the raffle is in Cancelled state
/// 2. Ensures signer is the owner of the ticket position
/// 3. Verifies the treasury account matches the one stored in raffle
/// 4. Confirms the position actually paid something
///
/// # Implementation Notes
/// - Refunds the exact amount the participant paid across all purchases
/// - Closes the position account; closure is the terminal "refunded" state,
///   so re-running for the same participant fails account resolution with
///   no side effects
/// - A failed transfer reverts the whole transaction, leaving the position
///   open and the refund retryable
pub fn refund_position(ctx: Context<RefundPosition>) -> Result<()> {
    require!(
        ctx.accounts.raffle.status == RaffleStatus::Cancelled,
        RaffleError::RaffleNotCancelled
    );
    require!(
        ctx.accounts.signer.key() == ctx.accounts.ticket_position.owner,
        RaffleError::OwnerMismatch
    );
    require!(
        ctx.accounts.raffle.treasury.key() == ctx.accounts.treasury.key(),
        RaffleError::InvalidTreasury
    );
    require!(
        ctx.accounts.ticket_position.total_paid > 0,
        RaffleError::NothingToRefund
    );

    let refund_amount = ctx.accounts.ticket_position.total_paid;

    // Transfer lamports by directly deducting from treasury and adding to
    // the participant. This only works because the treasury is a PDA owned
    // by our program.
    let from_account = ctx.accounts.treasury.to_account_info();
    let to_account = ctx.accounts.signer.to_account_info();
    require!(
        from_account.lamports() >= refund_amount,
        RaffleError::InsufficientFunds
    );
    from_account.sub_lamports(refund_amount)?;
    to_account.add_lamports(refund_amount)?;

    emit!(PositionRefunded {
        raffle: ctx.accounts.raffle.key(),
        owner: ctx.accounts.ticket_position.owner,
        refund_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RefundPosition<'info> {
    /// The participant reclaiming their stake in the cancelled raffle
    #[account(mut)]
    pub signer: Signer<'info>,

    /// Ticket position PDA for this participant in this raffle.
    /// Account is closed and rent is reclaimed; closure marks it refunded.
    #[account(
        mut,
        close = signer,
        seeds = [
            b"ticket_position",
            raffle.key().as_ref(),
            signer.key().as_ref()
        ],
        bump = ticket_position.bump
    )]
    pub ticket_position: Account<'info, TicketPosition>,

    /// The raffle account that must be in Cancelled state
    pub raffle: Account<'info, Raffle>,

    /// Treasury PDA for this raffle that holds the funds
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
