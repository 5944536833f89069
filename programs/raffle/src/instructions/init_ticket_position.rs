use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleStatus, TicketPosition, TICKET_POSITION_ACCOUNT_SIZE},
};

/// Initializes a participant's cumulative ticket position for one raffle.
/// PDA-derived using ["ticket_position", raffle_pubkey, participant_pubkey],
/// so there is exactly one position per participant per raffle.
///
/// The position enforces the max-tickets-per-participant limit across all of
/// that participant's purchases and carries the refundable total if the
/// raffle is cancelled. It is closed when the refund is paid out.
pub fn init_ticket_position(ctx: Context<InitTicketPosition>) -> Result<()> {
    require!(
        matches!(
            ctx.accounts.raffle.status,
            RaffleStatus::Scheduled | RaffleStatus::Active
        ),
        RaffleError::RaffleNotOpen
    );

    let position = &mut ctx.accounts.ticket_position;
    position.raffle = ctx.accounts.raffle.key();
    position.owner = ctx.accounts.signer.key();
    position.ticket_count = 0;
    position.total_paid = 0;
    position.bump = ctx.bumps.ticket_position;

    Ok(())
}

#[derive(Accounts)]
pub struct InitTicketPosition<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = TICKET_POSITION_ACCOUNT_SIZE,
        seeds = [
            b"ticket_position",
            raffle.key().as_ref(),
            signer.key().as_ref(),
        ],
        bump,
    )]
    pub ticket_position: Account<'info, TicketPosition>,

    pub raffle: Account<'info, Raffle>,
    pub system_program: Program<'info, System>,
}
