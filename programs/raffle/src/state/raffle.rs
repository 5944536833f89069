use anchor_lang::prelude::*;

use crate::error::RaffleError;
use crate::state::TicketPosition;

/// Hard cap on winners per raffle; bounds the winners/paid vectors.
pub const MAX_WINNERS: usize = 10;

/// Remaining time below which a raffle is considered "ending". Purely a
/// read-side signal; entries stay open until `end_time`.
pub const ENDING_WINDOW_SECS: i64 = 60 * 60;

/// Minimum age of a pending randomness request before an emergency cancel
/// is allowed. Protects an in-flight legitimate draw from being discarded.
pub const EMERGENCY_CANCEL_COOLDOWN_SECS: i64 = 12 * 60 * 60;

// Space calculation:
// 8 (discriminator) +
// 32 (treasury) +
// 1 (kind) +
// 1 (status) +
// 1 (paused) +
// 8 (entry_price) +
// 8 (max_tickets_per_entrant) +
// 1 (winner_count) +
// 1 (allow_repeat_winners) +
// 8 (min_participants) +
// 2 (protocol_fee_bps) +
// 8 (total_tickets) +
// 8 (total_participants) +
// 8 (total_pool) +
// 8 (start_time) +
// 8 (end_time) +
// 17 (draw: largest variant is AwaitingRandomness { u64, i64 }) +
// 4 + 32 * 10 (winners: Vec<Pubkey>, MAX_WINNERS) +
// 4 + 10 (winners_paid: Vec<bool>, MAX_WINNERS) +
// 8 (prize_per_winner) +
// 2 (cancel_reason: Option<CancelReason>) =
// 476 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + 1 + 1 + 1 + 8 + 8 + 1 + 1 + 8 + 2 + 8 + 8 + 8 + 8 + 8 + 17
        + (4 + 32 * MAX_WINNERS)
        + (4 + MAX_WINNERS)
        + 8
        + 2;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum RaffleKind {
    Daily = 0,
    Weekly = 1,
    Monthly = 2,
    Flash = 3,
    Mega = 4,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum RaffleStatus {
    Scheduled = 0,
    Active = 1,
    Drawing = 2,
    Completed = 3,
    Cancelled = 4,
}

/// Two-phase randomness lifecycle, stored on the raffle itself so a stuck
/// draw is a queryable state rather than an unobserved hang.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    AwaitingRandomness { request_slot: u64, requested_at: i64 },
    Resolved { random_value: u64 },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Operator,
    InsufficientParticipants,
    RandomnessTimeout,
}

#[account]
pub struct Raffle {
    pub treasury: Pubkey,
    pub kind: RaffleKind,
    pub status: RaffleStatus,
    pub paused: bool,
    pub entry_price: u64,
    pub max_tickets_per_entrant: u64,
    pub winner_count: u8,
    pub allow_repeat_winners: bool,
    pub min_participants: u64,
    pub protocol_fee_bps: u16,
    pub total_tickets: u64,
    pub total_participants: u64,
    pub total_pool: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub draw: DrawState,
    pub winners: Vec<Pubkey>,
    pub winners_paid: Vec<bool>,
    pub prize_per_winner: u64,
    pub cancel_reason: Option<CancelReason>,
}

impl Raffle {
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, RaffleStatus::Completed | RaffleStatus::Cancelled)
    }

    /// True while entries are accepted: Active, within the time window, not paused.
    pub fn is_open_for_entries(&self, now: i64) -> bool {
        self.status == RaffleStatus::Active
            && !self.paused
            && now >= self.start_time
            && now < self.end_time
    }

    /// Soft "ending" substate: still open, but less than an hour remains.
    pub fn is_ending(&self, now: i64) -> bool {
        self.status == RaffleStatus::Active
            && now < self.end_time
            && self.end_time - now < ENDING_WINDOW_SECS
    }

    /// Applies one ticket purchase to the raffle's running totals and the
    /// buyer's cumulative position. Keeps the accounting invariants in one
    /// place: after every purchase, `total_pool` equals the sum of all
    /// positions' paid amounts and `total_tickets` the sum of their ticket
    /// counts. Errors leave both records untouched.
    pub fn apply_purchase(
        &mut self,
        position: &mut TicketPosition,
        ticket_count: u64,
    ) -> Result<PurchaseReceipt> {
        require!(ticket_count > 0, RaffleError::InvalidTicketCount);

        let new_position_count = position
            .ticket_count
            .checked_add(ticket_count)
            .ok_or(RaffleError::Overflow)?;
        require!(
            new_position_count <= self.max_tickets_per_entrant,
            RaffleError::EntrantLimitExceeded
        );

        let payment_amount = ticket_count
            .checked_mul(self.entry_price)
            .ok_or(RaffleError::Overflow)?;
        let ticket_start_index = self.total_tickets;
        let first_entry = position.ticket_count == 0;

        self.total_tickets = self
            .total_tickets
            .checked_add(ticket_count)
            .ok_or(RaffleError::Overflow)?;
        self.total_pool = self
            .total_pool
            .checked_add(payment_amount)
            .ok_or(RaffleError::Overflow)?;
        if first_entry {
            self.total_participants = self
                .total_participants
                .checked_add(1)
                .ok_or(RaffleError::Overflow)?;
        }

        position.ticket_count = new_position_count;
        position.total_paid = position
            .total_paid
            .checked_add(payment_amount)
            .ok_or(RaffleError::Overflow)?;

        Ok(PurchaseReceipt {
            payment_amount,
            ticket_start_index,
            first_entry,
        })
    }

    /// Splits the pool at settlement: protocol fee first, remainder divided
    /// evenly across the winners. Integer-division dust stays behind with
    /// the fee. Returns (fee, prize per winner).
    pub fn prize_split(&self, winner_count: u64) -> Result<(u64, u64)> {
        let protocol_fee = self
            .total_pool
            .checked_mul(self.protocol_fee_bps as u64)
            .ok_or(RaffleError::Overflow)?
            .checked_div(10_000)
            .ok_or(RaffleError::Overflow)?;
        let prize_total = self
            .total_pool
            .checked_sub(protocol_fee)
            .ok_or(RaffleError::Overflow)?;
        let prize_per_winner = prize_total
            .checked_div(winner_count)
            .ok_or(RaffleError::Overflow)?;
        Ok((protocol_fee, prize_per_winner))
    }
}

/// Outcome of one purchase against a raffle's accounting.
pub struct PurchaseReceipt {
    pub payment_amount: u64,
    pub ticket_start_index: u64,
    pub first_entry: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raffle(status: RaffleStatus, start: i64, end: i64) -> Raffle {
        Raffle {
            treasury: Pubkey::default(),
            kind: RaffleKind::Daily,
            status,
            paused: false,
            entry_price: 10,
            max_tickets_per_entrant: 5,
            winner_count: 1,
            allow_repeat_winners: false,
            min_participants: 2,
            protocol_fee_bps: 500,
            total_tickets: 0,
            total_participants: 0,
            total_pool: 0,
            start_time: start,
            end_time: end,
            draw: DrawState::Idle,
            winners: vec![],
            winners_paid: vec![],
            prize_per_winner: 0,
            cancel_reason: None,
        }
    }

    #[test]
    fn entries_close_at_end_time() {
        let r = raffle(RaffleStatus::Active, 0, 100);
        assert!(r.is_open_for_entries(99));
        assert!(!r.is_open_for_entries(100));
    }

    #[test]
    fn drawing_rejects_entries() {
        let r = raffle(RaffleStatus::Drawing, 0, 100);
        assert!(!r.is_open_for_entries(50));
    }

    #[test]
    fn paused_rejects_entries_but_clock_runs() {
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        r.paused = true;
        assert!(!r.is_open_for_entries(50));
    }

    #[test]
    fn ending_is_a_soft_signal() {
        let r = raffle(RaffleStatus::Active, 0, 10_000);
        assert!(!r.is_ending(1_000));
        assert!(r.is_ending(10_000 - ENDING_WINDOW_SECS + 1));
        // Still open throughout the ending window.
        assert!(r.is_open_for_entries(10_000 - 1));
    }

    fn position(owner: Pubkey) -> TicketPosition {
        TicketPosition {
            raffle: Pubkey::default(),
            owner,
            ticket_count: 0,
            total_paid: 0,
            bump: 0,
        }
    }

    #[test]
    fn purchases_keep_totals_reconciled() {
        // entry_price=10, max 5 per participant; A buys 3, B buys 2.
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        let a = Pubkey::new_from_array([1; 32]);
        let b = Pubkey::new_from_array([2; 32]);
        let mut pos_a = position(a);
        let mut pos_b = position(b);

        let receipt_a = r.apply_purchase(&mut pos_a, 3).unwrap();
        assert_eq!(receipt_a.payment_amount, 30);
        assert_eq!(receipt_a.ticket_start_index, 0);
        assert!(receipt_a.first_entry);

        let receipt_b = r.apply_purchase(&mut pos_b, 2).unwrap();
        assert_eq!(receipt_b.payment_amount, 20);
        assert_eq!(receipt_b.ticket_start_index, 3);

        assert_eq!(r.total_pool, 50);
        assert_eq!(r.total_tickets, 5);
        assert_eq!(r.total_participants, 2);
        assert_eq!(r.total_pool, pos_a.total_paid + pos_b.total_paid);
        assert_eq!(r.total_tickets, pos_a.ticket_count + pos_b.ticket_count);
    }

    #[test]
    fn entrant_limit_is_cumulative() {
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        let a = Pubkey::new_from_array([1; 32]);
        let mut pos_a = position(a);

        r.apply_purchase(&mut pos_a, 3).unwrap();
        // 3 + 3 = 6 exceeds the limit of 5; nothing changes.
        assert!(r.apply_purchase(&mut pos_a, 3).is_err());
        assert_eq!(r.total_pool, 30);
        assert_eq!(pos_a.ticket_count, 3);
        // Topping up to exactly the limit is fine.
        r.apply_purchase(&mut pos_a, 2).unwrap();
        assert_eq!(pos_a.ticket_count, 5);
        assert_eq!(r.total_participants, 1);
    }

    #[test]
    fn rejects_zero_tickets() {
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        let mut pos = position(Pubkey::new_from_array([1; 32]));
        assert!(r.apply_purchase(&mut pos, 0).is_err());
    }

    #[test]
    fn prize_split_takes_fee_then_divides() {
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        r.total_pool = 1_000;
        r.protocol_fee_bps = 500; // 5%
        let (fee, per_winner) = r.prize_split(3).unwrap();
        assert_eq!(fee, 50);
        assert_eq!(per_winner, 316); // 950 / 3, dust stays in treasury
        assert!(fee + per_winner * 3 <= r.total_pool);
    }

    #[test]
    fn prize_split_rejects_zero_winners() {
        let mut r = raffle(RaffleStatus::Active, 0, 100);
        r.total_pool = 100;
        assert!(r.prize_split(0).is_err());
    }
}
