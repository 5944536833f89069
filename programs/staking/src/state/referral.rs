use anchor_lang::prelude::*;

use crate::{error::StakingError, state::REFERRAL_LEVELS};

// 8 discriminator + 32 owner + 32 referrer + 8 commission_accrued
// + 8 referred_count + 8 created_at + 1 bump
pub const REFERRAL_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

/// One referral edge per user: the direct referrer is set exactly once, at
/// registration. Commission from every depth at which this user appears in
/// a referred stake's ancestor chain accumulates in `commission_accrued`;
/// each credit is derived from the referred stake's amount at funding time
/// and is never recomputed.
#[account]
pub struct ReferralAccount {
    pub owner: Pubkey,
    /// Direct referrer; `Pubkey::default()` terminates the chain walk.
    pub referrer: Pubkey,
    /// Lifetime commission in lamports; withdrawals draw against it via the
    /// staker's total_withdrawn reservation.
    pub commission_accrued: u64,
    /// Direct referrals registered under this user.
    pub referred_count: u64,
    pub created_at: i64,
    pub bump: u8,
}

/// Resolution of one ancestor in a referrer chain walk.
pub enum AncestorLink {
    /// The ancestor never registered a referrer; the chain ends here.
    Unregistered,
    /// The ancestor's recorded direct referrer.
    Registered { referrer: Pubkey },
}

/// Walks the ancestor chain from `referrer` and rejects the new edge
/// `user -> referrer` if the caller appears anywhere in it within the
/// commission horizon.
///
/// Every step demands proof: `resolve` is consulted for each ancestor in
/// turn and must either return that ancestor's state or error. A walk that
/// cannot prove where the chain ends never passes, so withholding accounts
/// is not a way around the check. The walk stops at an unregistered
/// ancestor, a default-key referrer, or the level cap.
pub fn check_referral_cycle<F>(user: &Pubkey, referrer: &Pubkey, mut resolve: F) -> Result<()>
where
    F: FnMut(usize, &Pubkey) -> Result<AncestorLink>,
{
    let mut ancestor = *referrer;
    for level in 0..REFERRAL_LEVELS {
        require!(ancestor != *user, StakingError::ReferralCycle);
        match resolve(level, &ancestor)? {
            AncestorLink::Unregistered => return Ok(()),
            AncestorLink::Registered { referrer: next } => {
                if next == Pubkey::default() {
                    return Ok(());
                }
                ancestor = next;
            }
        }
    }
    require!(ancestor != *user, StakingError::ReferralCycle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    /// Resolver over a fixed edge set; ancestors outside it are unregistered.
    fn resolver(
        edges: Vec<(Pubkey, Pubkey)>,
    ) -> impl FnMut(usize, &Pubkey) -> Result<AncestorLink> {
        move |_level, ancestor| {
            Ok(edges
                .iter()
                .find(|(owner, _)| owner == ancestor)
                .map(|(_, referrer)| AncestorLink::Registered {
                    referrer: *referrer,
                })
                .unwrap_or(AncestorLink::Unregistered))
        }
    }

    #[test]
    fn unregistered_referrer_passes() {
        let (user, referrer) = (key(1), key(2));
        assert!(check_referral_cycle(&user, &referrer, resolver(vec![])).is_ok());
    }

    #[test]
    fn chain_ending_in_default_referrer_passes() {
        let (user, referrer) = (key(1), key(2));
        let edges = vec![(referrer, Pubkey::default())];
        assert!(check_referral_cycle(&user, &referrer, resolver(edges)).is_ok());
    }

    #[test]
    fn two_node_cycle_rejected() {
        // A's referrer is U; U registering A would close U -> A -> U
        let (u, a) = (key(1), key(2));
        let err = check_referral_cycle(&u, &a, resolver(vec![(a, u)])).unwrap_err();
        assert_eq!(err, StakingError::ReferralCycle.into());
    }

    #[test]
    fn deep_cycle_rejected() {
        // U -> A -> B -> C -> U
        let (u, a, b, c) = (key(1), key(2), key(3), key(4));
        let err =
            check_referral_cycle(&u, &a, resolver(vec![(a, b), (b, c), (c, u)])).unwrap_err();
        assert_eq!(err, StakingError::ReferralCycle.into());
    }

    #[test]
    fn cycle_closing_at_the_horizon_rejected() {
        // the caller sits right behind the last provable ancestor
        let user = key(9);
        let chain: Vec<Pubkey> = (1..=5).map(key).collect();
        let mut edges: Vec<(Pubkey, Pubkey)> =
            chain.windows(2).map(|w| (w[0], w[1])).collect();
        edges.push((chain[4], user));
        let err = check_referral_cycle(&user, &chain[0], resolver(edges)).unwrap_err();
        assert_eq!(err, StakingError::ReferralCycle.into());
    }

    #[test]
    fn long_acyclic_chain_passes() {
        let user = key(9);
        let chain: Vec<Pubkey> = (1..=8).map(key).collect();
        let edges: Vec<(Pubkey, Pubkey)> = chain.windows(2).map(|w| (w[0], w[1])).collect();
        assert!(check_referral_cycle(&user, &chain[0], resolver(edges)).is_ok());
    }

    #[test]
    fn unproven_ancestor_fails_the_walk() {
        // a resolver that cannot produce the ancestor's state blocks
        // registration instead of letting the edge through
        let (u, a) = (key(1), key(2));
        let err = check_referral_cycle(&u, &a, |_, _| {
            Err(StakingError::InvalidReferralChain.into())
        })
        .unwrap_err();
        assert_eq!(err, StakingError::InvalidReferralChain.into());
    }

    #[test]
    fn referrer_state_is_always_demanded() {
        // even a single-edge registration consults the chain once; there is
        // no path that skips the proof entirely
        let (u, a) = (key(1), key(2));
        let mut calls = 0;
        let result = check_referral_cycle(&u, &a, |_, _| {
            calls += 1;
            Ok(AncestorLink::Unregistered)
        });
        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }
}
