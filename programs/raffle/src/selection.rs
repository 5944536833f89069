use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Cryptographic mixing function with strong avalanche properties
/// Each bit in the output has a ~50% chance of flipping when any input bit changes.
/// Based on splitmix64 algorithm used in high-quality PRNGs.
pub fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z = z ^ (z >> 31);

    z
}

/// Maps a random number to a range without introducing statistical bias
/// Standard modulo operations can bias results when the range isn't a power of 2.
pub fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    if range == 0 {
        return Err(RaffleError::Overflow.into());
    }

    // If range is a power of 2, a mask is exact and unbiased
    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    // For small ranges, simple modulo is fine as bias is minimal
    if range <= 256 {
        return Ok(x % range);
    }

    // Rejection sampling with a cap on iterations to bound compute cost
    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;

    const MAX_ATTEMPTS: u8 = 3;

    for i in 0..MAX_ATTEMPTS {
        if value < threshold {
            return Ok(value % range);
        }
        value = mix(value, value.wrapping_add(i as u64 + 1));
    }

    // Residual bias after three remix rounds is negligible
    Ok(value % range)
}

/// Ticket-weighted winner selection without replacement.
///
/// Participants are canonically ordered by address before selection, so the
/// result depends only on the random value and the entry set, never on the
/// order accounts were supplied in. Each round maps a remixed random value
/// onto the cumulative ticket-weight array; unless repeat wins are allowed,
/// the selected participant's tickets are removed before the next round.
pub fn select_winners(
    random_value: u64,
    participants: &[(Pubkey, u64)],
    winner_count: usize,
    allow_repeats: bool,
) -> Result<Vec<Pubkey>> {
    let mut pool: Vec<(Pubkey, u64)> = participants
        .iter()
        .filter(|(_, weight)| *weight > 0)
        .copied()
        .collect();
    pool.sort_unstable_by_key(|(key, _)| *key);

    let rounds = if allow_repeats {
        winner_count
    } else {
        winner_count.min(pool.len())
    };

    let mut winners = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let total: u64 = pool
            .iter()
            .try_fold(0u64, |acc, (_, weight)| acc.checked_add(*weight))
            .ok_or(RaffleError::Overflow)?;
        if total == 0 {
            break;
        }

        let ticket = unbiased_range(mix(random_value, round as u64 + 1), total)?;

        let mut cumulative = 0u64;
        let mut selected = pool.len() - 1;
        for (index, (_, weight)) in pool.iter().enumerate() {
            cumulative += weight;
            if ticket < cumulative {
                selected = index;
                break;
            }
        }

        winners.push(pool[selected].0);
        if !allow_repeats {
            pool.remove(selected);
        }
    }

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn selection_is_deterministic() {
        let participants = vec![(key(1), 3), (key(2), 2), (key(3), 7)];
        let first = select_winners(0xDEAD_BEEF, &participants, 2, false).unwrap();
        let second = select_winners(0xDEAD_BEEF, &participants, 2, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn selection_ignores_input_order() {
        let forward = vec![(key(1), 3), (key(2), 2), (key(3), 7)];
        let reversed: Vec<_> = forward.iter().rev().copied().collect();
        assert_eq!(
            select_winners(42, &forward, 3, false).unwrap(),
            select_winners(42, &reversed, 3, false).unwrap(),
        );
    }

    #[test]
    fn no_repeats_unless_allowed() {
        let participants = vec![(key(1), 10), (key(2), 1)];
        for seed in 0..64u64 {
            let winners = select_winners(seed, &participants, 2, false).unwrap();
            assert_eq!(winners.len(), 2);
            assert_ne!(winners[0], winners[1]);
        }
    }

    #[test]
    fn truncates_when_fewer_participants_than_winners() {
        let participants = vec![(key(1), 3), (key(2), 2)];
        let winners = select_winners(7, &participants, 5, false).unwrap();
        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn repeat_wins_fill_every_slot() {
        let participants = vec![(key(1), 5)];
        let winners = select_winners(9, &participants, 3, true).unwrap();
        assert_eq!(winners, vec![key(1), key(1), key(1)]);
    }

    #[test]
    fn zero_weight_participants_never_win() {
        let participants = vec![(key(1), 0), (key(2), 4)];
        for seed in 0..32u64 {
            let winners = select_winners(seed, &participants, 1, false).unwrap();
            assert_eq!(winners, vec![key(2)]);
        }
    }

    #[test]
    fn weights_bias_the_draw() {
        // With a 99:1 ticket split the heavy participant should win the
        // overwhelming majority of first draws across seeds.
        let participants = vec![(key(1), 99), (key(2), 1)];
        let heavy_wins = (0..1000u64)
            .filter(|seed| {
                select_winners(*seed, &participants, 1, false).unwrap()[0] == key(1)
            })
            .count();
        assert!(heavy_wins > 950, "heavy participant won only {heavy_wins}/1000");
    }

    #[test]
    fn unbiased_range_stays_in_range() {
        for x in [0u64, 1, u64::MAX, 0x1234_5678_9ABC_DEF0] {
            for range in [1u64, 2, 3, 100, 257, 1 << 32, u64::MAX - 1] {
                assert!(unbiased_range(x, range).unwrap() < range);
            }
        }
    }

    #[test]
    fn unbiased_range_rejects_empty_range() {
        assert!(unbiased_range(5, 0).is_err());
    }
}
