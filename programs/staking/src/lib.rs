use anchor_lang::prelude::*;
use instructions::*;

pub mod accrual;
pub mod calendar;
pub mod error;
pub mod instructions;
pub mod state;

use state::REFERRAL_LEVELS;

declare_id!("HmbTLCmaGvZhKnn1Zfa1JVnp7vkMV4DYVxPLWBVoN65L");

#[program]
pub mod staking_rewards {
    use super::*;

    pub fn init_staking_config(
        ctx: Context<InitStakingConfig>,
        min_stake: u64,
        max_stake: u64,
        monthly_rate_bps: u16,
        duration_months: u8,
        withdrawal_day: u8,
        referral_rates_bps: [u16; REFERRAL_LEVELS],
    ) -> Result<()> {
        instructions::init_staking_config::init_staking_config(
            ctx,
            min_stake,
            max_stake,
            monthly_rate_bps,
            duration_months,
            withdrawal_day,
            referral_rates_bps,
        )
    }

    pub fn init_staker(ctx: Context<InitStaker>) -> Result<()> {
        instructions::init_staker::init_staker(ctx)
    }

    pub fn register_referrer<'info>(
        ctx: Context<'_, '_, 'info, 'info, RegisterReferrer<'info>>,
        referrer: Pubkey,
    ) -> Result<()> {
        instructions::register_referrer::register_referrer(ctx, referrer)
    }

    pub fn create_stake(ctx: Context<CreateStake>, amount: u64) -> Result<()> {
        instructions::create_stake::create_stake(ctx, amount)
    }

    pub fn fund_stake<'info>(
        ctx: Context<'_, '_, 'info, 'info, FundStake<'info>>,
    ) -> Result<()> {
        instructions::fund_stake::fund_stake(ctx)
    }

    pub fn complete_stake(ctx: Context<CompleteStake>) -> Result<()> {
        instructions::complete_stake::complete_stake(ctx)
    }

    pub fn create_withdrawal<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateWithdrawal<'info>>,
        month: u32,
        amount: u64,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::create_withdrawal::create_withdrawal(ctx, month, amount, destination)
    }

    pub fn settle_withdrawal(ctx: Context<SettleWithdrawal>) -> Result<()> {
        instructions::settle_withdrawal::settle_withdrawal(ctx)
    }

    pub fn fail_withdrawal(ctx: Context<FailWithdrawal>) -> Result<()> {
        instructions::settle_withdrawal::fail_withdrawal(ctx)
    }
}
