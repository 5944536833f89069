use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{CancelReason, DrawState, Raffle, RaffleStatus},
};

/// Event emitted when a raffle's entry window closes into the draw phase
#[event]
pub struct RaffleClosed {
    pub raffle: Pubkey,
    pub closed_at: i64,
    pub total_tickets: u64,
    pub total_participants: u64,
    pub total_pool: u64,
}

/// Event emitted when a raffle auto-cancels for lack of participants
#[event]
pub struct RaffleAutoCancelled {
    pub raffle: Pubkey,
    pub cancelled_at: i64,
    pub total_participants: u64,
    pub min_participants: u64,
}

/// Closes the entry window of a raffle whose end time has passed.
///
/// With enough unique participants the raffle moves Active → Drawing and
/// randomness can be requested. Below the minimum it auto-cancels instead,
/// opening every position for refund — never a draw error.
///
/// Cron-triggered and safe to invoke redundantly: a raffle already past
/// Active is a logged no-op.
pub fn close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;

    if !matches!(raffle.status, RaffleStatus::Scheduled | RaffleStatus::Active) {
        msg!("raffle already closed, nothing to do");
        return Ok(());
    }

    let now = Clock::get()?.unix_timestamp;
    require!(now >= raffle.end_time, RaffleError::RaffleNotEnded);

    if raffle.total_participants < raffle.min_participants {
        raffle.status = RaffleStatus::Cancelled;
        raffle.cancel_reason = Some(CancelReason::InsufficientParticipants);

        emit!(RaffleAutoCancelled {
            raffle: raffle.key(),
            cancelled_at: now,
            total_participants: raffle.total_participants,
            min_participants: raffle.min_participants,
        });
        return Ok(());
    }

    raffle.status = RaffleStatus::Drawing;
    raffle.draw = DrawState::Idle;

    emit!(RaffleClosed {
        raffle: raffle.key(),
        closed_at: now,
        total_tickets: raffle.total_tickets,
        total_participants: raffle.total_participants,
        total_pool: raffle.total_pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseRaffle<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,
}
