use anchor_lang::prelude::*;

use crate::{
    accrual::SECONDS_PER_MONTH,
    error::StakingError,
    state::{
        ReferralAccount, RewardsVault, Stake, StakeStatus, Staker, StakingConfig,
        REFERRAL_LEVELS,
    },
};

/// Event emitted when a stake is funded and activated
#[event]
pub struct StakeFunded {
    pub stake: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub end_time: i64,
}

/// Event emitted for each referral commission credited during funding
#[event]
pub struct CommissionAccrued {
    /// The ancestor receiving the commission
    pub referrer: Pubkey,
    /// The staker whose deposit generated it
    pub referred: Pubkey,
    /// Depth of the edge (1 = direct referrer)
    pub level: u8,
    pub amount: u64,
}

/// Funds a Pending stake and activates it.
///
/// The deposit transfer and the activation are one atomic transaction: the
/// stake cannot be observed Active without the funds having irrevocably
/// landed in the vault, and a failed transfer leaves it Pending. Accrual
/// runs from the funding timestamp.
///
/// On activation the owner's referrer chain is walked up to five levels
/// (ReferralAccounts passed as remaining accounts, PDA-verified link by
/// link) and each ancestor is credited `amount * rate[level]`. The credit
/// is derived once, from the stake amount at funding time, and never
/// recomputed.
///
/// The walk must prove its own termination: each successive ancestor's
/// referral PDA is required, an uninitialized PDA counts as the chain's
/// end, and running out of accounts while the chain continues fails the
/// funding. A staker cannot strip ancestors of commission by withholding
/// their accounts. The walk stops at a proven chain end or the level cap,
/// so even a malformed graph cannot recurse unbounded.
pub fn fund_stake<'info>(ctx: Context<'_, '_, 'info, 'info, FundStake<'info>>) -> Result<()> {
    require!(
        ctx.accounts.stake.status == StakeStatus::Pending,
        StakingError::StakeNotPending
    );

    let amount = ctx.accounts.stake.amount;
    let now = Clock::get()?.unix_timestamp;

    // Deposit into the vault
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.signer.key(),
            &ctx.accounts.vault.key(),
            amount,
        ),
        &[
            ctx.accounts.signer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
        ],
    )?;

    let end_time = now
        .checked_add(ctx.accounts.stake.duration_months as i64 * SECONDS_PER_MONTH)
        .ok_or(StakingError::Overflow)?;

    let stake = &mut ctx.accounts.stake;
    stake.status = StakeStatus::Active;
    stake.start_time = now;
    stake.end_time = end_time;

    ctx.accounts.staker.total_staked = ctx
        .accounts
        .staker
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::Overflow)?;

    emit!(StakeFunded {
        stake: ctx.accounts.stake.key(),
        owner: ctx.accounts.signer.key(),
        amount,
        start_time: now,
        end_time,
    });

    // Referral commission fan-out. remaining_accounts[0] is the owner's own
    // referral PDA (uninitialized when the owner never registered a
    // referrer); each subsequent account is the next ancestor's. The walk
    // only ends at a proven chain end or the level cap, never at the end of
    // the supplied list.
    let owner = ctx.accounts.signer.key();
    let rates = ctx.accounts.config.referral_rates_bps;

    let mut accounts = ctx.remaining_accounts.iter();
    let mut expected_owner = owner;

    for level in 0..=REFERRAL_LEVELS as u8 {
        let account_info = accounts
            .next()
            .ok_or(StakingError::InvalidReferralChain)?;

        let (expected_pda, _) = Pubkey::find_program_address(
            &[b"referral", expected_owner.as_ref()],
            ctx.program_id,
        );
        require!(
            expected_pda == account_info.key(),
            StakingError::InvalidReferralChain
        );

        // Uninitialized PDA: this user never registered; the chain ends
        if account_info.data_is_empty() {
            break;
        }

        let mut referral: Account<ReferralAccount> = Account::try_from(account_info)?;
        require!(
            referral.owner == expected_owner,
            StakingError::InvalidReferralChain
        );

        // The first account locates the chain; commission goes to the
        // ancestors behind it.
        if level > 0 {
            let rate = rates[(level - 1) as usize] as u64;
            let commission = amount
                .checked_mul(rate)
                .ok_or(StakingError::Overflow)?
                .checked_div(10_000)
                .ok_or(StakingError::Overflow)?;

            referral.commission_accrued = referral
                .commission_accrued
                .checked_add(commission)
                .ok_or(StakingError::Overflow)?;
            referral.exit(ctx.program_id)?;

            emit!(CommissionAccrued {
                referrer: expected_owner,
                referred: owner,
                level,
                amount: commission,
            });
        }

        expected_owner = referral.referrer;
        if expected_owner == Pubkey::default() {
            break;
        }
    }

    Ok(())
}

#[derive(Accounts)]
pub struct FundStake<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [
            b"stake",
            signer.key().as_ref(),
            stake.index.to_le_bytes().as_ref(),
        ],
        bump = stake.bump,
        constraint = stake.owner == signer.key() @ StakingError::NotStakeOwner,
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

    #[account(
        mut,
        seeds = [b"vault"],
        bump = vault.bump,
    )]
    pub vault: Account<'info, RewardsVault>,

    pub system_program: Program<'info, System>,
    // remaining_accounts: the owner's referrer chain of referral PDAs,
    // starting with the owner's own (always required, up to 1 + 5
    // accounts); the first uninitialized PDA proves the chain's end
}
