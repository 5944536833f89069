use anchor_lang::prelude::*;

use crate::state::{Staker, STAKER_ACCOUNT_SIZE};

/// Initializes the per-owner aggregate account. One per wallet; seeds the
/// owner's stake sequence and tracks lifetime staked/withdrawn totals.
pub fn init_staker(ctx: Context<InitStaker>) -> Result<()> {
    let staker = &mut ctx.accounts.staker;
    staker.owner = ctx.accounts.signer.key();
    staker.stake_count = 0;
    staker.total_staked = 0;
    staker.total_withdrawn = 0;
    staker.bump = ctx.bumps.staker;
    Ok(())
}

#[derive(Accounts)]
pub struct InitStaker<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = STAKER_ACCOUNT_SIZE,
        seeds = [b"staker", signer.key().as_ref()],
        bump,
    )]
    pub staker: Account<'info, Staker>,

    pub system_program: Program<'info, System>,
}
