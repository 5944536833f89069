use anchor_lang::prelude::*;

use crate::{
    error::StakingError,
    state::{
        RewardsVault, Staker, StakingConfig, Withdrawal, WithdrawalStatus,
        REWARDS_VAULT_ACCOUNT_SIZE,
    },
};

/// Event emitted when a withdrawal is paid out
#[event]
pub struct WithdrawalSettled {
    pub withdrawal: Pubkey,
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

/// Event emitted when a withdrawal is abandoned and its month slot released
#[event]
pub struct WithdrawalFailed {
    pub withdrawal: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Pays a Pending withdrawal from the rewards vault.
///
/// Payout-authority triggered. The transfer and the Completed transition
/// are one atomic transaction; a transfer that cannot be covered leaves the
/// withdrawal Pending and retryable. Re-invoking against a Completed
/// withdrawal fails the state check, so settlement can never double-pay.
pub fn settle_withdrawal(ctx: Context<SettleWithdrawal>) -> Result<()> {
    require!(
        ctx.accounts.withdrawal.status == WithdrawalStatus::Pending,
        StakingError::WithdrawalNotPending
    );
    require!(
        ctx.accounts.destination.key() == ctx.accounts.withdrawal.destination,
        StakingError::DestinationMismatch
    );

    let amount = ctx.accounts.withdrawal.amount;
    let vault_account = ctx.accounts.vault.to_account_info();

    // Keep the vault rent-exempt
    let rent_lamports = (Rent::get()?).minimum_balance(REWARDS_VAULT_ACCOUNT_SIZE);
    require!(
        vault_account.lamports() >= amount.checked_add(rent_lamports).ok_or(StakingError::Overflow)?,
        StakingError::InsufficientVaultFunds
    );

    // Transfer lamports by directly deducting from the vault and adding to
    // the destination. This only works because the vault is a PDA owned by
    // our program.
    vault_account.sub_lamports(amount)?;
    ctx.accounts.destination.add_lamports(amount)?;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.status = WithdrawalStatus::Completed;
    withdrawal.completed_at = Clock::get()?.unix_timestamp;

    emit!(WithdrawalSettled {
        withdrawal: withdrawal.key(),
        owner: withdrawal.owner,
        destination: withdrawal.destination,
        amount,
    });

    Ok(())
}

/// Marks a Pending withdrawal as failed: releases the reserved amount and
/// closes the month-slot account, so the owner can re-request this month or
/// the next. An explicit, audited operator action — never an automatic
/// assumption of success or failure.
pub fn fail_withdrawal(ctx: Context<FailWithdrawal>) -> Result<()> {
    require!(
        ctx.accounts.withdrawal.status == WithdrawalStatus::Pending,
        StakingError::WithdrawalNotPending
    );

    let amount = ctx.accounts.withdrawal.amount;
    ctx.accounts.staker.total_withdrawn = ctx
        .accounts
        .staker
        .total_withdrawn
        .checked_sub(amount)
        .ok_or(StakingError::Overflow)?;

    emit!(WithdrawalFailed {
        withdrawal: ctx.accounts.withdrawal.key(),
        owner: ctx.accounts.withdrawal.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SettleWithdrawal<'info> {
    #[account(mut)]
    pub payout_authority: Signer<'info>,

    #[account(mut)]
    pub withdrawal: Account<'info, Withdrawal>,

    /// The wallet named in the withdrawal request
    /// CHECK: validated against the stored destination
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"vault"],
        bump = vault.bump,
    )]
    pub vault: Account<'info, RewardsVault>,

    #[account(
        seeds = [b"staking_config"],
        bump = config.bump,
        has_one = payout_authority @ StakingError::NotPayoutAuthority,
    )]
    pub config: Account<'info, StakingConfig>,
}

#[derive(Accounts)]
pub struct FailWithdrawal<'info> {
    #[account(mut)]
    pub payout_authority: Signer<'info>,

    /// Closed on failure; rent returns to the owner and the month slot
    /// reopens for a retry.
    #[account(
        mut,
        close = owner,
        has_one = owner @ StakingError::NotStakeOwner,
    )]
    pub withdrawal: Account<'info, Withdrawal>,

    /// CHECK: receives the closed account's rent; matched via has_one
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"staker", withdrawal.owner.as_ref()],
        bump = staker.bump,
    )]
    pub staker: Account<'info, Staker>,

    #[account(
        seeds = [b"staking_config"],
        bump = config.bump,
        has_one = payout_authority @ StakingError::NotPayoutAuthority,
    )]
    pub config: Account<'info, StakingConfig>,
}
