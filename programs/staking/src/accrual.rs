use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Accrual months are fixed 30-day periods, counted whole.
pub const SECONDS_PER_MONTH: i64 = 30 * 24 * 60 * 60;

/// Whole accrual months elapsed between `start` and `now`.
pub fn months_elapsed(start: i64, now: i64) -> u64 {
    if now <= start {
        0
    } else {
        ((now - start) / SECONDS_PER_MONTH) as u64
    }
}

/// Reward accrued by a stake at time `now`.
///
/// A pure function of the stake's parameters, never a stored counter:
/// `amount * monthly_rate * min(months_elapsed, duration_months)`.
/// Recomputation is always authoritative, so there is no drift to reconcile
/// and accrual is monotonic until it caps at the configured duration.
pub fn accrued_reward(
    amount: u64,
    monthly_rate_bps: u16,
    duration_months: u8,
    start: i64,
    now: i64,
) -> Result<u64> {
    let months = months_elapsed(start, now).min(duration_months as u64);

    let reward = (amount as u128)
        .checked_mul(monthly_rate_bps as u128)
        .and_then(|v| v.checked_mul(months as u128))
        .and_then(|v| v.checked_div(10_000))
        .ok_or(StakingError::Overflow)?;

    u64::try_from(reward).map_err(|_| StakingError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 24 * 60 * 60;

    #[test]
    fn whole_months_only() {
        assert_eq!(months_elapsed(0, 29 * DAY), 0);
        assert_eq!(months_elapsed(0, 30 * DAY), 1);
        assert_eq!(months_elapsed(0, 59 * DAY), 1);
        assert_eq!(months_elapsed(0, 95 * DAY), 3);
    }

    #[test]
    fn nothing_accrues_before_start() {
        assert_eq!(months_elapsed(1_000, 500), 0);
        assert_eq!(accrued_reward(1_000, 800, 24, 1_000, 500).unwrap(), 0);
    }

    #[test]
    fn three_months_at_eight_percent() {
        // 1000 staked at 8% monthly: day 95 is 3 whole months -> 240
        assert_eq!(accrued_reward(1_000, 800, 24, 0, 95 * DAY).unwrap(), 240);
    }

    #[test]
    fn accrual_caps_at_duration() {
        // day 800 is past the 24-month duration -> capped at 1920
        assert_eq!(accrued_reward(1_000, 800, 24, 0, 800 * DAY).unwrap(), 1_920);
        // and holds steady forever after
        assert_eq!(
            accrued_reward(1_000, 800, 24, 0, 800 * DAY).unwrap(),
            accrued_reward(1_000, 800, 24, 0, 10_000 * DAY).unwrap(),
        );
    }

    #[test]
    fn accrual_is_monotonic() {
        let mut last = 0;
        for day in (0..900).step_by(7) {
            let reward = accrued_reward(1_000, 800, 24, 0, day * DAY).unwrap();
            assert!(reward >= last, "accrual decreased at day {day}");
            last = reward;
        }
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        // u64::MAX lamports over 60 months at the rate cap stays in range
        // because the intermediate runs in u128.
        let reward = accrued_reward(u64::MAX / 100, 100, 60, 0, 61 * 30 * DAY).unwrap();
        assert!(reward > 0);
    }
}
