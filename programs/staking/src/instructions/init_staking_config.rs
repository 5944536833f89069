use anchor_lang::prelude::*;

use crate::{
    error::StakingError,
    state::{RewardsVault, StakingConfig, REFERRAL_LEVELS, REWARDS_VAULT_ACCOUNT_SIZE, STAKING_CONFIG_ACCOUNT_SIZE},
};

const MAX_MONTHLY_RATE_BPS: u16 = 2_000; // 20% per month
const MAX_DURATION_MONTHS: u8 = 60;

/// Instruction to initialize the staking configuration and rewards vault
/// This should be called once during program deployment
///
/// # Security Considerations
/// - Creates the config PDA and the lamport-holding vault PDA
/// - The authority and payout authority are set and locked
/// - Rate, duration, withdrawal-day and referral-rate parameters are
///   validated once here; stakes snapshot them at creation time
pub fn init_staking_config(
    ctx: Context<InitStakingConfig>,
    min_stake: u64,
    max_stake: u64,
    monthly_rate_bps: u16,
    duration_months: u8,
    withdrawal_day: u8,
    referral_rates_bps: [u16; REFERRAL_LEVELS],
) -> Result<()> {
    require!(min_stake > 0 && min_stake <= max_stake, StakingError::AmountOutOfRange);
    require!(
        monthly_rate_bps > 0 && monthly_rate_bps <= MAX_MONTHLY_RATE_BPS,
        StakingError::InvalidRate
    );
    require!(
        duration_months >= 1 && duration_months <= MAX_DURATION_MONTHS,
        StakingError::InvalidDuration
    );
    require!(
        withdrawal_day >= 1 && withdrawal_day <= 28,
        StakingError::InvalidWithdrawalDay
    );
    for rate in referral_rates_bps {
        require!(rate <= MAX_MONTHLY_RATE_BPS, StakingError::InvalidRate);
    }

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.payout_authority = ctx.accounts.payout_authority.key();
    config.min_stake = min_stake;
    config.max_stake = max_stake;
    config.monthly_rate_bps = monthly_rate_bps;
    config.duration_months = duration_months;
    config.withdrawal_day = withdrawal_day;
    config.referral_rates_bps = referral_rates_bps;
    config.bump = ctx.bumps.config;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    Ok(())
}

#[derive(Accounts)]
pub struct InitStakingConfig<'info> {
    #[account(
        init,
        payer = authority,
        space = STAKING_CONFIG_ACCOUNT_SIZE,
        seeds = [b"staking_config"],
        bump
    )]
    pub config: Account<'info, StakingConfig>,

    #[account(
        init,
        payer = authority,
        space = REWARDS_VAULT_ACCOUNT_SIZE,
        seeds = [b"vault"],
        bump
    )]
    pub vault: Account<'info, RewardsVault>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub payout_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
