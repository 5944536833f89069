use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{DrawState, Raffle, RaffleStatus},
};

/// Event emitted when randomness is requested for a draw
#[event]
pub struct DrawRequested {
    pub raffle: Pubkey,
    pub request_slot: u64,
    pub requested_at: i64,
}

/// Opens the two-phase draw by recording a randomness request on the raffle.
///
/// The request pins the current slot; `fulfill_draw` must run in a later
/// slot, so the block-hash entropy it reads did not exist when the request
/// was made. While the request is pending the raffle stays in Drawing and
/// rejects entries and plain cancellation; the only exits are fulfillment
/// or the cooldown-gated emergency cancel.
pub fn request_draw(ctx: Context<RequestDraw>) -> Result<()> {
    let raffle = &mut ctx.accounts.raffle;

    require!(
        raffle.draw == DrawState::Idle,
        RaffleError::RandomnessAlreadyRequested
    );

    let clock = Clock::get()?;
    raffle.draw = DrawState::AwaitingRandomness {
        request_slot: clock.slot,
        requested_at: clock.unix_timestamp,
    };

    emit!(DrawRequested {
        raffle: raffle.key(),
        request_slot: clock.slot,
        requested_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestDraw<'info> {
    #[account(
        mut,
        constraint = raffle.status == RaffleStatus::Drawing @ RaffleError::RaffleNotDrawing,
    )]
    pub raffle: Account<'info, Raffle>,
}
