use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, RaffleStatus},
};

/// Event emitted when a raffle's paused flag changes
#[event]
pub struct RafflePauseToggled {
    pub raffle: Pubkey,
    pub paused: bool,
}

/// Pauses entry acceptance on an Active raffle. The entry window keeps
/// running; pausing does not extend `end_time`.
pub fn pause_raffle(ctx: Context<TogglePause>) -> Result<()> {
    set_paused(ctx, true)
}

/// Re-opens a paused raffle for entries.
pub fn resume_raffle(ctx: Context<TogglePause>) -> Result<()> {
    set_paused(ctx, false)
}

fn set_paused(ctx: Context<TogglePause>, paused: bool) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;
    require!(
        raffle.status == RaffleStatus::Active,
        RaffleError::RaffleNotActive
    );

    raffle.paused = paused;

    emit!(RafflePauseToggled {
        raffle: raffle.key(),
        paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TogglePause<'info> {
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
