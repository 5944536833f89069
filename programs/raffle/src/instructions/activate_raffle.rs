use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleStatus},
};

/// Event emitted when a scheduled raffle opens for entries
#[event]
pub struct RaffleActivated {
    pub raffle: Pubkey,
    pub activated_at: i64,
}

/// Flips a Scheduled raffle to Active once its start time has passed.
///
/// Cron-triggered; redundant invocations against an already activated (or
/// terminalized) raffle are logged no-ops rather than errors, so overlapping
/// scheduler runs are harmless.
pub fn activate_raffle(ctx: Context<ActivateRaffle>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;

    if raffle.status != RaffleStatus::Scheduled {
        msg!("raffle already past Scheduled, nothing to activate");
        return Ok(());
    }

    let now = Clock::get()?.unix_timestamp;
    require!(now >= raffle.start_time, RaffleError::RaffleNotStarted);

    raffle.status = RaffleStatus::Active;

    emit!(RaffleActivated {
        raffle: raffle.key(),
        activated_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ActivateRaffle<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,
}
