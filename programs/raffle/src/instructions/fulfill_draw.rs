use std::str::FromStr;

use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::{
    error::RaffleError,
    selection::{mix, select_winners},
    state::{DrawState, Raffle, RaffleStatus, TicketPosition},
};

/// Event emitted when a draw resolves and winners are recorded
#[event]
pub struct DrawFulfilled {
    pub raffle: Pubkey,
    pub random_value: u64,
    pub winners: Vec<Pubkey>,
    pub prize_per_winner: u64,
    pub protocol_fee: u64,
}

/// Resolves a pending randomness request and settles the winner set.
///
/// Entropy comes from the SlotHashes sysvar — block hashes produced after
/// the request slot, so they were unknowable when the request was made —
/// mixed through splitmix64 with the current timestamp. The resulting
/// random value is stored on the raffle, making the selection independently
/// reproducible: the same value over the same entry set always yields the
/// same winners.
///
/// Winner selection is ticket-weighted without replacement (unless the
/// raffle allows repeat wins) over the full participant set, which is passed
/// as remaining accounts. Each account must be the PDA-derived
/// TicketPosition of a distinct participant, and the set must reconcile
/// exactly with the raffle's running totals — an incomplete or padded set
/// cannot slip through.
///
/// Execution requirements:
/// 1. The raffle must be in Drawing state with a pending randomness request
/// 2. At least one slot must have elapsed since the request
/// 3. remaining_accounts must carry every participant's TicketPosition
///
/// After execution:
/// - `draw` is `Resolved { random_value }`
/// - winners and per-winner prize (pool minus protocol fee, split evenly)
///   are recorded and the raffle is Completed
///
/// # Errors
/// - `RaffleNotDrawing` / `RandomnessNotRequested` on lifecycle violations
/// - `RandomnessNotReady` if invoked in the request slot
/// - `InvalidSlotHashesAccount` if the provided sysvar is wrong
/// - `PositionSetMismatch` / `DuplicatePosition` if the participant set does
///   not reconcile with the raffle totals
pub fn fulfill_draw<'info>(ctx: Context<'_, '_, 'info, 'info, FulfillDraw<'info>>) -> Result<()> {
    let (request_slot, _requested_at) = match ctx.accounts.raffle.draw {
        DrawState::AwaitingRandomness {
            request_slot,
            requested_at,
        } => (request_slot, requested_at),
        _ => return Err(RaffleError::RandomnessNotRequested.into()),
    };

    let clock = Clock::get()?;
    require!(clock.slot > request_slot, RaffleError::RandomnessNotReady);

    // Manually validate the recent_slothashes account
    let pubkey_matches = Pubkey::from_str("SysvarS1otHashes111111111111111111111111111")
        .or(Err(RaffleError::InvalidSlotHashesAccount))?
        .eq(&ctx.accounts.recent_slothashes.key());
    require!(pubkey_matches, RaffleError::InvalidSlotHashesAccount);

    let random_value = {
        let data = ctx.accounts.recent_slothashes.data.borrow();

        // Extract entropy from SlotHashes data
        let chunk1 = array_ref![data, 12, 8];
        let chunk2 = if data.len() >= 28 {
            array_ref![data, 20, 8]
        } else {
            chunk1
        };

        let hash_value1 = u64::from_le_bytes(*chunk1);
        let hash_value2 = u64::from_le_bytes(*chunk2);
        let timestamp = clock.unix_timestamp as u64;

        // Combine entropy sources through cryptographic mixing
        let mut mixed = mix(hash_value1, timestamp);
        mixed = mix(mixed, hash_value2);
        mixed
    };

    // Reconstruct the participant set from the supplied TicketPosition PDAs
    let raffle_key = ctx.accounts.raffle.key();
    let mut participants: Vec<(Pubkey, u64)> =
        Vec::with_capacity(ctx.remaining_accounts.len());
    let mut ticket_sum: u64 = 0;

    for account_info in ctx.remaining_accounts.iter() {
        let position: Account<TicketPosition> = Account::try_from(account_info)?;

        let (expected, _) = Pubkey::find_program_address(
            &[
                b"ticket_position",
                raffle_key.as_ref(),
                position.owner.as_ref(),
            ],
            ctx.program_id,
        );
        require!(
            expected == account_info.key(),
            RaffleError::PositionSetMismatch
        );

        require!(
            !participants.iter().any(|(owner, _)| *owner == position.owner),
            RaffleError::DuplicatePosition
        );

        ticket_sum = ticket_sum
            .checked_add(position.ticket_count)
            .ok_or(RaffleError::Overflow)?;
        participants.push((position.owner, position.ticket_count));
    }

    // The set must be complete: every participant, every ticket accounted for
    let raffle = &mut ctx.accounts.raffle;
    require!(
        participants.len() as u64 == raffle.total_participants
            && ticket_sum == raffle.total_tickets,
        RaffleError::PositionSetMismatch
    );

    let winners = select_winners(
        random_value,
        &participants,
        raffle.winner_count as usize,
        raffle.allow_repeat_winners,
    )?;

    let (protocol_fee, prize_per_winner) = raffle.prize_split(winners.len() as u64)?;

    raffle.draw = DrawState::Resolved { random_value };
    raffle.winners = winners.clone();
    raffle.winners_paid = vec![false; winners.len()];
    raffle.prize_per_winner = prize_per_winner;
    raffle.status = RaffleStatus::Completed;

    emit!(DrawFulfilled {
        raffle: raffle_key,
        random_value,
        winners,
        prize_per_winner,
        protocol_fee,
    });

    Ok(())
}

/// Accounts required for the fulfill_draw instruction
#[derive(Accounts)]
pub struct FulfillDraw<'info> {
    /// The raffle being drawn. Must be in Drawing state with a pending
    /// randomness request.
    #[account(
        mut,
        constraint = raffle.status == RaffleStatus::Drawing @ RaffleError::RaffleNotDrawing,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The SlotHashes sysvar contains the most recent block hashes.
    /// This is used as a source of randomness.
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
    // remaining_accounts: every TicketPosition PDA of this raffle
}
