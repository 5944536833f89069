use crate::{
    error::RaffleError,
    state::{
        raffle::{DrawState, Raffle, RaffleKind, RaffleStatus},
        Config, Treasury, MAX_WINNERS, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE,
    },
};
use anchor_lang::prelude::*;

// Constants for validation
const MAX_ENTRY_PRICE: u64 = 100_000_000_000; // 100 SOL
const MIN_ENTRY_PRICE: u64 = 1_000_000; // 0.001 SOL
const MAX_DURATION: i64 = 35 * 24 * 60 * 60; // 35 days, covers monthly raffles
const MIN_DURATION: i64 = 10 * 60; // 10 minutes, covers flash raffles

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    pub kind: RaffleKind,
    /// Price per ticket in lamports
    pub entry_price: u64,
    pub winner_count: u8,
    pub start_time: i64,
    pub end_time: i64,
    /// Initial status: Scheduled, or Active when start_time has passed
    pub status: RaffleStatus,
}

/// Instruction to create a new raffle with specified parameters
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `kind` - Cadence class of the raffle (daily/weekly/monthly/flash/mega)
/// * `entry_price` - Price per ticket in lamports
/// * `start_time` / `end_time` - Entry window, validated against duration bounds
/// * `max_tickets_per_entrant` - Hard cap on one participant's cumulative tickets
/// * `winner_count` - Number of winners drawn at settlement (1..=10)
/// * `min_participants` - Unique participants required to draw; 0 takes the config default
/// * `allow_repeat_winners` - Whether one address may take more than one prize slot
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the management authority via config PDA
/// 2. Ensures entry_price is within [0.001, 100] SOL
/// 3. Verifies start < end and the duration is within [10 min, 35 days]
/// 4. Verifies end_time is in the future
/// 5. Bounds winner_count by the account-size cap
/// 6. Uses a PDA for treasury with proper seeds
///
/// # Implementation Notes
/// - A raffle whose start_time has already passed is created directly Active;
///   otherwise it is Scheduled and flipped by `activate_raffle`
/// - The draw state starts Idle; winners vectors are filled at draw resolution
pub fn create_raffle(
    ctx: Context<CreateRaffle>,
    kind: RaffleKind,
    entry_price: u64,
    start_time: i64,
    end_time: i64,
    max_tickets_per_entrant: u64,
    winner_count: u8,
    min_participants: u64,
    allow_repeat_winners: bool,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    // Price checks
    require!(entry_price >= MIN_ENTRY_PRICE, RaffleError::InvalidEntryPrice);
    require!(entry_price <= MAX_ENTRY_PRICE, RaffleError::InvalidEntryPrice);

    // Time checks
    require!(start_time < end_time, RaffleError::InvalidTimeRange);
    require!(end_time > current_time, RaffleError::EndTimeInPast);
    let duration = end_time.checked_sub(start_time).ok_or(RaffleError::Overflow)?;
    require!(duration >= MIN_DURATION, RaffleError::InvalidDuration);
    require!(duration <= MAX_DURATION, RaffleError::InvalidDuration);

    // Winner and limit checks
    require!(
        winner_count >= 1 && winner_count as usize <= MAX_WINNERS,
        RaffleError::InvalidWinnerCount
    );
    require!(max_tickets_per_entrant > 0, RaffleError::InvalidEntrantLimit);

    let min_participants = if min_participants == 0 {
        ctx.accounts.config.min_participants
    } else {
        min_participants
    };

    let status = if start_time <= current_time {
        RaffleStatus::Active
    } else {
        RaffleStatus::Scheduled
    };

    let raffle = &mut ctx.accounts.raffle;
    raffle.treasury = ctx.accounts.treasury.key();
    raffle.kind = kind;
    raffle.status = status;
    raffle.paused = false;
    raffle.entry_price = entry_price;
    raffle.max_tickets_per_entrant = max_tickets_per_entrant;
    raffle.winner_count = winner_count;
    raffle.allow_repeat_winners = allow_repeat_winners;
    raffle.min_participants = min_participants;
    raffle.protocol_fee_bps = ctx.accounts.config.protocol_fee_bps;
    raffle.total_tickets = 0;
    raffle.total_participants = 0;
    raffle.total_pool = 0;
    raffle.start_time = start_time;
    raffle.end_time = end_time;
    raffle.draw = DrawState::Idle;
    raffle.winners = Vec::new();
    raffle.winners_paid = Vec::new();
    raffle.prize_per_winner = 0;
    raffle.cancel_reason = None;

    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    // Increment the raffle counter
    ctx.accounts.config.raffle_counter = ctx
        .accounts
        .config
        .raffle_counter
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(RaffleCreated {
        raffle: ctx.accounts.raffle.key(),
        kind,
        entry_price,
        winner_count,
        start_time,
        end_time,
        status,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            config.raffle_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The config account storing authorities, fee policy and raffle counter
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
