use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleStatus, Treasury},
};

/// Event emitted when a winner's prize is paid out
#[event]
pub struct WinnerPaid {
    pub raffle: Pubkey,
    pub winner: Pubkey,
    pub winner_index: u8,
    pub prize_amount: u64,
}

/// Pays one winner's prize from the raffle treasury.
///
/// Retry-safe by construction: the paid flag is checked before the transfer,
/// so re-invoking for an already paid winner is a logged no-op and can never
/// double-pay. A transfer that fails reverts the whole transaction, leaving
/// the flag unset and the payout retryable.
pub fn pay_winner(ctx: Context<PayWinner>, winner_index: u8) -> Result<()> {
    let index = winner_index as usize;
    require!(
        index < ctx.accounts.raffle.winners.len(),
        RaffleError::InvalidWinnerIndex
    );
    require!(
        ctx.accounts.raffle.winners[index] == ctx.accounts.winner.key(),
        RaffleError::OwnerMismatch
    );

    if ctx.accounts.raffle.winners_paid[index] {
        msg!("winner {} already paid, skipping", winner_index);
        return Ok(());
    }

    let prize_amount = ctx.accounts.raffle.prize_per_winner;

    // Transfer lamports by directly deducting from treasury and adding to
    // the winner. This only works because the treasury is a PDA owned by
    // our program.
    let treasury_account = ctx.accounts.treasury.to_account_info();
    require!(
        treasury_account.lamports() >= prize_amount,
        RaffleError::InsufficientFunds
    );
    treasury_account.sub_lamports(prize_amount)?;
    ctx.accounts.winner.add_lamports(prize_amount)?;

    ctx.accounts.raffle.winners_paid[index] = true;

    emit!(WinnerPaid {
        raffle: ctx.accounts.raffle.key(),
        winner: ctx.accounts.winner.key(),
        winner_index,
        prize_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PayWinner<'info> {
    #[account(
        mut,
        constraint = raffle.status == RaffleStatus::Completed @ RaffleError::RaffleNotCompleted,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The winning wallet receiving the prize
    /// CHECK: validated against the recorded winner at the given index
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// Treasury PDA holding the pool
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
