use anchor_lang::prelude::*;

use crate::{
    error::StakingError,
    state::{Stake, StakeStatus},
};

/// Event emitted when a stake reaches maturity
#[event]
pub struct StakeCompleted {
    pub stake: Pubkey,
    pub owner: Pubkey,
    pub completed_at: i64,
}

/// Flips a matured Active stake to Completed. Accrual is already capped by
/// the duration, so the flip changes no balances; it only terminalizes the
/// record. Cron-triggered and safe to invoke redundantly: an already
/// Completed stake is a logged no-op.
pub fn complete_stake(ctx: Context<CompleteStake>) -> Result<()> {
    let stake = &mut ctx.accounts.stake;

    if stake.status == StakeStatus::Completed {
        msg!("stake already completed, nothing to do");
        return Ok(());
    }
    require!(stake.status == StakeStatus::Active, StakingError::StakeNotActive);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= stake.end_time, StakingError::StakeNotMatured);

    stake.status = StakeStatus::Completed;

    emit!(StakeCompleted {
        stake: stake.key(),
        owner: stake.owner,
        completed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CompleteStake<'info> {
    #[account(mut)]
    pub stake: Account<'info, Stake>,
}
