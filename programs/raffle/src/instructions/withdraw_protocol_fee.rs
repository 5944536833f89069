use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, RaffleStatus, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the protocol fee is swept from a raffle treasury
#[event]
pub struct ProtocolFeeWithdrawn {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Amount withdrawn in lamports
    pub amount: u64,
}

/// Instruction to sweep a completed raffle's treasury remainder (protocol
/// fee plus prize-division dust) to the payout authority
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the raffle is Completed
/// 2. Requires every winner to have been paid first, so prize funds can
///    never be swept as fee
/// 3. Verifies the signer is the payout authority stored in config, which
///    also receives the swept funds
/// 4. Leaves the treasury rent-exempt
pub fn withdraw_protocol_fee(ctx: Context<WithdrawProtocolFee>) -> Result<()> {
    require!(
        ctx.accounts.raffle.winners_paid.iter().all(|paid| *paid),
        RaffleError::WinnersNotPaid,
    );
    require!(
        ctx.accounts.treasury.key() == ctx.accounts.raffle.treasury,
        RaffleError::InvalidTreasury
    );

    let treasury_account = ctx.accounts.treasury.to_account_info();
    let payout_authority = ctx.accounts.payout_authority.to_account_info();

    let treasury_balance = treasury_account.lamports();
    require!(treasury_balance > 0, RaffleError::InsufficientFunds);

    // Keep the treasury rent-exempt; only the excess is swept
    let rent_lamports = (Rent::get()?).minimum_balance(TREASURY_ACCOUNT_SIZE);
    let lamports_to_withdraw = treasury_balance
        .checked_sub(rent_lamports)
        .ok_or(RaffleError::InsufficientFunds)?;

    treasury_account.sub_lamports(lamports_to_withdraw)?;
    payout_authority.add_lamports(lamports_to_withdraw)?;

    emit!(ProtocolFeeWithdrawn {
        raffle: ctx.accounts.raffle.key(),
        amount: lamports_to_withdraw,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawProtocolFee<'info> {
    #[account(
        constraint = raffle.status == RaffleStatus::Completed @ RaffleError::RaffleNotCompleted,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Signs the sweep and receives the swept funds
    #[account(mut)]
    pub payout_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = payout_authority @ RaffleError::NotPayoutAuthority
    )]
    pub config: Account<'info, Config>,
}
