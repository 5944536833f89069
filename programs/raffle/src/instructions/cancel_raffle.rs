use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        CancelReason, Config, DrawState, Raffle, RaffleStatus,
        EMERGENCY_CANCEL_COOLDOWN_SECS,
    },
};

/// Event emitted when a raffle is cancelled
#[event]
pub struct RaffleCancelled {
    pub raffle: Pubkey,
    pub cancelled_at: i64,
    pub reason: CancelReason,
    /// Pool amount now owed back to participants
    pub refundable_pool: u64,
}

/// Cancels a raffle from any non-terminal state.
///
/// Cancellation is the one escape valve from the otherwise monotonic status
/// progression. Every confirmed position becomes refundable; refunds are
/// paid out per participant via `refund_position`.
///
/// A raffle whose draw has a pending randomness request cannot be cancelled
/// here — that path goes through `emergency_cancel_draw`, which enforces a
/// cooldown so an operator cannot discard an in-flight legitimate draw.
pub fn cancel_raffle(ctx: Context<CancelRaffle>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    require!(!raffle.is_terminal(), RaffleError::RaffleTerminal);
    require!(
        !matches!(raffle.draw, DrawState::AwaitingRandomness { .. }),
        RaffleError::DrawInFlight
    );

    let now = Clock::get()?.unix_timestamp;
    raffle.status = RaffleStatus::Cancelled;
    raffle.cancel_reason = Some(CancelReason::Operator);

    emit!(RaffleCancelled {
        raffle: raffle.key(),
        cancelled_at: now,
        reason: CancelReason::Operator,
        refundable_pool: raffle.total_pool,
    });

    Ok(())
}

/// Cancels a raffle stuck in Drawing because its randomness request never
/// resolved. Only allowed once the request has aged past the 12-hour
/// cooldown; the stuck draw is surfaced, never silently retried.
pub fn emergency_cancel_draw(ctx: Context<CancelRaffle>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    require!(
        raffle.status == RaffleStatus::Drawing,
        RaffleError::RaffleNotDrawing
    );

    let requested_at = match raffle.draw {
        DrawState::AwaitingRandomness { requested_at, .. } => requested_at,
        _ => return Err(RaffleError::RandomnessNotRequested.into()),
    };

    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= requested_at.saturating_add(EMERGENCY_CANCEL_COOLDOWN_SECS),
        RaffleError::CooldownNotElapsed
    );

    raffle.status = RaffleStatus::Cancelled;
    raffle.cancel_reason = Some(CancelReason::RandomnessTimeout);

    emit!(RaffleCancelled {
        raffle: raffle.key(),
        cancelled_at: now,
        reason: CancelReason::RandomnessTimeout,
        refundable_pool: raffle.total_pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelRaffle<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,

    pub management_authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotManagementAuthority,
    )]
    pub config: Account<'info, Config>,
}
