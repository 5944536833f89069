use anchor_lang::prelude::*;

use crate::{
    accrual::accrued_reward,
    calendar::{day_of_month, month_index},
    error::StakingError,
    state::{
        ReferralAccount, Stake, StakeStatus, Staker, StakingConfig, Withdrawal,
        WithdrawalStatus, WITHDRAWAL_ACCOUNT_SIZE,
    },
};

/// Event emitted when a withdrawal request is accepted
#[event]
pub struct WithdrawalRequested {
    pub withdrawal: Pubkey,
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub month: u32,
    pub available_balance: u64,
}

/// Requests a withdrawal against accrued stake rewards and referral
/// commission.
///
/// Gating:
/// - Only on the configured day of month.
/// - At most one non-failed withdrawal per owner per calendar month — the
///   month index is part of the PDA seed, so a second request in the same
///   month cannot even create its account. A failed withdrawal releases
///   the slot by closing the account.
/// - `amount` must not exceed the available balance computed at request
///   time: Σ accrued rewards over the owner's stakes, plus referral
///   commission, minus everything previously withdrawn or reserved.
///
/// The owner's stakes are passed as remaining accounts in strictly
/// increasing index order, so no stake can be counted twice. Stakes omitted
/// by the caller only lower the computed balance, never raise it.
///
/// The request reserves its amount immediately (`total_withdrawn`); payout
/// itself is the payout authority's `settle_withdrawal`.
pub fn create_withdrawal<'info>(
    ctx: Context<'_, '_, 'info, 'info, CreateWithdrawal<'info>>,
    month: u32,
    amount: u64,
    destination: Pubkey,
) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.config;
    require!(
        day_of_month(now) == config.withdrawal_day as u32,
        StakingError::WithdrawalWindowClosed
    );
    require!(month == month_index(now), StakingError::WrongMonthIndex);

    // Sum accrued rewards over the supplied stakes
    let owner = ctx.accounts.signer.key();
    let mut rewards: u64 = 0;
    let mut last_index: Option<u64> = None;

    for account_info in ctx.remaining_accounts.iter() {
        let stake: Account<Stake> = Account::try_from(account_info)?;
        require!(stake.owner == owner, StakingError::InvalidStakeAccount);

        let (expected_pda, _) = Pubkey::find_program_address(
            &[b"stake", owner.as_ref(), stake.index.to_le_bytes().as_ref()],
            ctx.program_id,
        );
        require!(
            expected_pda == account_info.key(),
            StakingError::InvalidStakeAccount
        );

        // Strictly increasing index order rules out double counting
        if let Some(last) = last_index {
            require!(stake.index > last, StakingError::StakeOrderViolation);
        }
        last_index = Some(stake.index);

        if matches!(stake.status, StakeStatus::Active | StakeStatus::Completed) {
            let reward = accrued_reward(
                stake.amount,
                stake.monthly_rate_bps,
                stake.duration_months,
                stake.start_time,
                now,
            )?;
            rewards = rewards.checked_add(reward).ok_or(StakingError::Overflow)?;
        }
    }

    let commission = ctx
        .accounts
        .referral
        .as_ref()
        .map(|referral| referral.commission_accrued)
        .unwrap_or(0);

    let earned = rewards
        .checked_add(commission)
        .ok_or(StakingError::Overflow)?;
    let available = earned.saturating_sub(ctx.accounts.staker.total_withdrawn);
    require!(amount <= available, StakingError::InsufficientBalance);

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.owner = owner;
    withdrawal.destination = destination;
    withdrawal.amount = amount;
    withdrawal.month_index = month;
    withdrawal.status = WithdrawalStatus::Pending;
    withdrawal.requested_at = now;
    withdrawal.completed_at = 0;
    withdrawal.bump = ctx.bumps.withdrawal;

    // Reserve the amount against future balance computations
    ctx.accounts.staker.total_withdrawn = ctx
        .accounts
        .staker
        .total_withdrawn
        .checked_add(amount)
        .ok_or(StakingError::Overflow)?;

    emit!(WithdrawalRequested {
        withdrawal: ctx.accounts.withdrawal.key(),
        owner,
        destination,
        amount,
        month,
        available_balance: available,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(month: u32)]
pub struct CreateWithdrawal<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The month-slot withdrawal PDA; its existence is the once-per-month
    /// guarantee for this owner.
    #[account(
        init,
        payer = signer,
        space = WITHDRAWAL_ACCOUNT_SIZE,
        seeds = [
            b"withdrawal",
            signer.key().as_ref(),
            month.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    #[account(
        mut,
        seeds = [b"staker", signer.key().as_ref()],
        bump = staker.bump,
    )]
    pub staker: Account<'info, Staker>,

    /// The owner's referral account, when they have one; contributes its
    /// accrued commission to the available balance.
    #[account(
        seeds = [b"referral", signer.key().as_ref()],
        bump = referral.bump,
    )]
    pub referral: Option<Account<'info, ReferralAccount>>,

    #[account(
        seeds = [b"staking_config"],
        bump = config.bump,
    )]
    pub config: Account<'info, StakingConfig>,

    pub system_program: Program<'info, System>,
    // remaining_accounts: the owner's Stake accounts in strictly
    // increasing index order
}
