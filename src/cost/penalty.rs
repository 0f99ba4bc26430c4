//! Position badness table.
//!
//! Maps the *shape* of a role profile (its counts sorted ascending) to a
//! fairness penalty. Role identity does not matter: `[3,1,0,0]` and
//! `[0,0,1,3]` are equally bad.
//!
//! The values are fixed reference data, not a formula. Balanced profiles
//! (spread ≤ 1) score zero and the penalty grows with spread. Coverage ends
//! at profiles totalling nine rounds; anything beyond is reported as
//! [`DrawError::UnsupportedProfile`].
//!
//! # Reference
//! Tabbie2 tab software, BP position badness table (as used at WUDC).

use crate::error::DrawError;
use crate::models::{Role, RoleProfile};

/// Sorted profile → badness. Keys are ascending so lookups can bisect.
static POSITION_BADNESS: [([u32; Role::COUNT], u32); 71] = [
    ([0, 0, 0, 0], 0),
    ([0, 0, 0, 1], 0),
    ([0, 0, 0, 2], 4),
    ([0, 0, 0, 3], 36),
    ([0, 0, 0, 4], 144),
    ([0, 0, 0, 5], 324),
    ([0, 0, 0, 6], 676),
    ([0, 0, 0, 7], 1296),
    ([0, 0, 0, 8], 2304),
    ([0, 0, 0, 9], 3600),
    ([0, 0, 1, 1], 0),
    ([0, 0, 1, 2], 4),
    ([0, 0, 1, 3], 36),
    ([0, 0, 1, 4], 100),
    ([0, 0, 1, 5], 256),
    ([0, 0, 1, 6], 576),
    ([0, 0, 1, 7], 1156),
    ([0, 0, 1, 8], 1936),
    ([0, 0, 2, 2], 16),
    ([0, 0, 2, 3], 36),
    ([0, 0, 2, 4], 100),
    ([0, 0, 2, 5], 256),
    ([0, 0, 2, 6], 576),
    ([0, 0, 2, 7], 1024),
    ([0, 0, 3, 3], 64),
    ([0, 0, 3, 4], 144),
    ([0, 0, 3, 5], 324),
    ([0, 0, 3, 6], 576),
    ([0, 0, 4, 4], 256),
    ([0, 0, 4, 5], 400),
    ([0, 1, 1, 1], 0),
    ([0, 1, 1, 2], 4),
    ([0, 1, 1, 3], 16),
    ([0, 1, 1, 4], 64),
    ([0, 1, 1, 5], 196),
    ([0, 1, 1, 6], 484),
    ([0, 1, 1, 7], 900),
    ([0, 1, 2, 2], 4),
    ([0, 1, 2, 3], 16),
    ([0, 1, 2, 4], 64),
    ([0, 1, 2, 5], 196),
    ([0, 1, 2, 6], 400),
    ([0, 1, 3, 3], 36),
    ([0, 1, 3, 4], 100),
    ([0, 1, 3, 5], 196),
    ([0, 1, 4, 4], 144),
    ([0, 2, 2, 2], 4),
    ([0, 2, 2, 3], 16),
    ([0, 2, 2, 4], 64),
    ([0, 2, 2, 5], 144),
    ([0, 2, 3, 3], 36),
    ([0, 2, 3, 4], 64),
    ([0, 3, 3, 3], 36),
    ([1, 1, 1, 1], 0),
    ([1, 1, 1, 2], 0),
    ([1, 1, 1, 3], 4),
    ([1, 1, 1, 4], 36),
    ([1, 1, 1, 5], 144),
    ([1, 1, 1, 6], 324),
    ([1, 1, 2, 2], 0),
    ([1, 1, 2, 3], 4),
    ([1, 1, 2, 4], 36),
    ([1, 1, 2, 5], 100),
    ([1, 1, 3, 3], 16),
    ([1, 1, 3, 4], 36),
    ([1, 2, 2, 2], 0),
    ([1, 2, 2, 3], 4),
    ([1, 2, 2, 4], 16),
    ([1, 2, 3, 3], 4),
    ([2, 2, 2, 2], 0),
    ([2, 2, 2, 3], 0),
];

/// Badness of a profile, or `None` if the table does not cover it.
pub fn lookup(profile: &RoleProfile) -> Option<u32> {
    let key = profile.sorted();
    POSITION_BADNESS
        .binary_search_by(|(k, _)| k.cmp(&key))
        .ok()
        .map(|i| POSITION_BADNESS[i].1)
}

/// Badness of a profile.
///
/// # Errors
/// [`DrawError::UnsupportedProfile`] if the profile is outside the table.
pub fn position_badness(profile: &RoleProfile) -> Result<u32, DrawError> {
    lookup(profile).ok_or(DrawError::UnsupportedProfile { profile: *profile })
}

/// Largest round total the table fully covers.
pub const MAX_COVERED_ROUNDS: u32 = 9;

#[cfg(test)]
mod tests {
    use super::*;

    fn badness(counts: [u32; 4]) -> u32 {
        position_badness(&RoleProfile::new(counts)).unwrap()
    }

    #[test]
    fn test_table_keys_sorted_and_unique() {
        for pair in POSITION_BADNESS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for (key, _) in POSITION_BADNESS.iter() {
            let mut sorted = *key;
            sorted.sort_unstable();
            assert_eq!(&sorted, key);
        }
    }

    #[test]
    fn test_reference_values() {
        assert_eq!(badness([0, 0, 0, 3]), 36);
        assert_eq!(badness([2, 2, 2, 2]), 0);
        assert_eq!(badness([2, 2, 2, 3]), 0);
        assert_eq!(badness([1, 0, 0, 0]), 0);
        assert_eq!(badness([0, 0, 0, 9]), 3600);
    }

    #[test]
    fn test_permutation_invariance() {
        assert_eq!(badness([3, 1, 0, 0]), badness([0, 0, 1, 3]));
        assert_eq!(badness([0, 5, 2, 0]), badness([2, 0, 0, 5]));
    }

    #[test]
    fn test_balanced_profiles_score_zero() {
        for (key, value) in POSITION_BADNESS.iter() {
            let spread = key[3] - key[0];
            assert_eq!(spread <= 1, *value == 0, "profile {key:?}");
        }
    }

    #[test]
    fn test_full_coverage_up_to_nine_rounds() {
        for a in 0..=MAX_COVERED_ROUNDS {
            for b in 0..=MAX_COVERED_ROUNDS - a {
                for c in 0..=MAX_COVERED_ROUNDS - a - b {
                    for d in 0..=MAX_COVERED_ROUNDS - a - b - c {
                        assert!(lookup(&RoleProfile::new([a, b, c, d])).is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn test_unsupported_profile() {
        let p = RoleProfile::new([0, 0, 0, 10]);
        assert!(lookup(&p).is_none());
        assert!(matches!(
            position_badness(&p),
            Err(DrawError::UnsupportedProfile { profile }) if profile == p
        ));
    }
}
