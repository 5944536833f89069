use anchor_lang::prelude::*;

use crate::{
    error::StakingError,
    state::{check_referral_cycle, AncestorLink, ReferralAccount, REFERRAL_ACCOUNT_SIZE},
};

/// Event emitted when a referral edge is created
#[event]
pub struct ReferrerRegistered {
    pub user: Pubkey,
    pub referrer: Pubkey,
}

/// Registers the caller's direct referrer, creating their referral account.
///
/// Each user has at most one direct referrer, fixed at registration: the
/// PDA init guarantees a second registration cannot even create its
/// account. Self-referral is rejected outright, and the referrer's ancestor
/// chain is walked up to the commission horizon to reject any cycle that
/// would feed the caller commission from their own stakes.
///
/// The walk is mandatory: remaining_accounts must carry each successive
/// ancestor's referral PDA until the chain provably ends, where an
/// uninitialized PDA is the proof that an ancestor never registered.
/// Running out of accounts while the chain continues fails the
/// registration, so the check cannot be skipped by withholding accounts.
pub fn register_referrer<'info>(
    ctx: Context<'_, '_, 'info, 'info, RegisterReferrer<'info>>,
    referrer: Pubkey,
) -> Result<()> {
    let user = ctx.accounts.signer.key();
    require!(referrer != user, StakingError::SelfReferral);
    require!(referrer != Pubkey::default(), StakingError::SelfReferral);

    let mut accounts = ctx.remaining_accounts.iter();
    check_referral_cycle(&user, &referrer, |level, ancestor| {
        let account_info = accounts
            .next()
            .ok_or(StakingError::InvalidReferralChain)?;

        let (expected_pda, _) = Pubkey::find_program_address(
            &[b"referral", ancestor.as_ref()],
            ctx.program_id,
        );
        require!(
            expected_pda == account_info.key(),
            StakingError::InvalidReferralChain
        );

        // The PDA was never initialized: this ancestor has no referrer
        if account_info.data_is_empty() {
            return Ok(AncestorLink::Unregistered);
        }

        let mut record: Account<ReferralAccount> = Account::try_from(account_info)?;
        require!(record.owner == *ancestor, StakingError::InvalidReferralChain);

        // The direct referrer gains one registered referral
        if level == 0 {
            record.referred_count = record
                .referred_count
                .checked_add(1)
                .ok_or(StakingError::Overflow)?;
            record.exit(ctx.program_id)?;
        }

        Ok(AncestorLink::Registered {
            referrer: record.referrer,
        })
    })?;

    let referral = &mut ctx.accounts.referral;
    referral.owner = user;
    referral.referrer = referrer;
    referral.commission_accrued = 0;
    referral.referred_count = 0;
    referral.created_at = Clock::get()?.unix_timestamp;
    referral.bump = ctx.bumps.referral;

    emit!(ReferrerRegistered { user, referrer });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterReferrer<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = REFERRAL_ACCOUNT_SIZE,
        seeds = [b"referral", signer.key().as_ref()],
        bump,
    )]
    pub referral: Account<'info, ReferralAccount>,

    pub system_program: Program<'info, System>,
    // remaining_accounts: the referrer's ancestor referral PDAs in chain
    // order, starting with the referrer's own; the first uninitialized PDA
    // proves the chain's end
}
