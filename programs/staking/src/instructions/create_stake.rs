use anchor_lang::prelude::*;

use crate::{
    error::StakingError,
    state::{Stake, StakeStatus, Staker, StakingConfig, STAKE_ACCOUNT_SIZE},
};

/// Event emitted when a stake is created (terms reserved, not yet funded)
#[event]
pub struct StakeCreated {
    pub stake: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub monthly_rate_bps: u16,
    pub duration_months: u8,
}

/// Creates a Pending stake: bounds-checks the amount and snapshots the
/// config terms. No funds move until `fund_stake`; accrual starts only at
/// funding time.
pub fn create_stake(ctx: Context<CreateStake>, amount: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(
        amount >= config.min_stake && amount <= config.max_stake,
        StakingError::AmountOutOfRange
    );

    let stake = &mut ctx.accounts.stake;
    stake.owner = ctx.accounts.signer.key();
    stake.index = ctx.accounts.staker.stake_count;
    stake.amount = amount;
    stake.monthly_rate_bps = config.monthly_rate_bps;
    stake.duration_months = config.duration_months;
    stake.status = StakeStatus::Pending;
    stake.created_at = Clock::get()?.unix_timestamp;
    stake.start_time = 0;
    stake.end_time = 0;
    stake.bump = ctx.bumps.stake;

    ctx.accounts.staker.stake_count = ctx
        .accounts
        .staker
        .stake_count
        .checked_add(1)
        .ok_or(StakingError::Overflow)?;

    emit!(StakeCreated {
        stake: ctx.accounts.stake.key(),
        owner: ctx.accounts.signer.key(),
        amount,
        monthly_rate_bps: config.monthly_rate_bps,
        duration_months: config.duration_months,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateStake<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = STAKE_ACCOUNT_SIZE,
        seeds = [
            b"stake",
            signer.key().as_ref(),
            staker.stake_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub stake: Account<'info, Stake>,

    #[account(
        mut,
        seeds = [b"staker", signer.key().as_ref()],
        bump = staker.bump,
    )]
    pub staker: Account<'info, Staker>,

    #[account(
        seeds = [b"staking_config"],
        bump = config.bump,
    )]
    pub config: Account<'info, StakingConfig>,

    pub system_program: Program<'info, System>,
}
