//! Built-in cost functions.
//!
//! # Categories
//!
//! - **Table-based**: PENALTY
//! - **Order statistics**: RANGE
//! - **Information-theoretic**: ENTROPY
//! - **Dispersion**: VARIANCE, ADJUSTED_VARIANCE
//!
//! # Cost Convention
//! All functions return lower costs for fairer seats. Except for RANGE,
//! each one scores the profile *after* the hypothetical seat.
//!
//! # References
//! - Shannon (1948), "A Mathematical Theory of Communication"
//! - Tabbie2 BP position badness table

use super::penalty::position_badness;
use super::{Cost, CostFunction};
use crate::error::DrawError;
use crate::models::{Role, RoleProfile};

// ======================== Table-based ========================

/// Position badness of the resulting profile.
///
/// Fails with [`DrawError::UnsupportedProfile`] once a profile leaves the
/// table (more than nine rounds).
#[derive(Debug, Clone, Copy)]
pub struct Penalty;

impl CostFunction for Penalty {
    fn name(&self) -> &'static str {
        "PENALTY"
    }

    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        position_badness(&profile.incremented(role)).map(f64::from)
    }

    fn description(&self) -> &'static str {
        "Position badness table lookup"
    }
}

// ======================== Order statistics ========================

/// How far this role's count sits above the least-held role.
///
/// Zero for any of the competitor's least-held roles.
#[derive(Debug, Clone, Copy)]
pub struct Range;

impl CostFunction for Range {
    fn name(&self) -> &'static str {
        "RANGE"
    }

    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        Ok(f64::from(profile.get(role) - profile.min()))
    }

    fn description(&self) -> &'static str {
        "Count above least-held role"
    }
}

// ======================== Information-theoretic ========================

/// Entropy shortfall of the resulting profile, scaled by rounds played.
///
/// `cost = (2 - H(p)) * total`, with `H` in bits over the four roles.
/// A perfectly even profile has `H = 2` and costs nothing.
///
/// `total` counts the round being drawn, so a first round costs 2, not 0.
#[derive(Debug, Clone, Copy)]
pub struct Entropy;

impl CostFunction for Entropy {
    fn name(&self) -> &'static str {
        "ENTROPY"
    }

    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        let after = profile.incremented(role);
        let total = f64::from(after.total());
        let max_entropy = (Role::COUNT as f64).log2();
        Ok((max_entropy - shannon_entropy_bits(&after)) * total)
    }

    fn description(&self) -> &'static str {
        "Scaled Shannon entropy shortfall"
    }
}

// ======================== Dispersion ========================

/// Population variance of the resulting profile.
#[derive(Debug, Clone, Copy)]
pub struct Variance;

impl CostFunction for Variance {
    fn name(&self) -> &'static str {
        "VARIANCE"
    }

    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        Ok(population_variance(&profile.incremented(role)))
    }

    fn description(&self) -> &'static str {
        "Population variance"
    }
}

/// Population variance above the unavoidable minimum for the same total.
///
/// A total that is not a multiple of four cannot be spread evenly; that
/// remainder variance is subtracted so only avoidable imbalance is charged.
#[derive(Debug, Clone, Copy)]
pub struct AdjustedVariance;

impl CostFunction for AdjustedVariance {
    fn name(&self) -> &'static str {
        "ADJUSTED_VARIANCE"
    }

    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        let after = profile.incremented(role);
        let excess = population_variance(&after) - ideal_variance(after.total());
        // float noise can dip just below zero
        Ok(excess.max(0.0))
    }

    fn description(&self) -> &'static str {
        "Variance above the even-split minimum"
    }
}

// ======================== Helpers ========================

/// Shannon entropy (bits) of the profile viewed as a distribution.
///
/// Empty profiles have zero entropy; zero counts contribute nothing.
pub fn shannon_entropy_bits(profile: &RoleProfile) -> f64 {
    let total = f64::from(profile.total());
    if total == 0.0 {
        return 0.0;
    }
    profile
        .counts()
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = f64::from(c) / total;
            -p * p.log2()
        })
        .sum()
}

/// Population variance of the per-role counts.
pub fn population_variance(profile: &RoleProfile) -> f64 {
    let n = Role::COUNT as f64;
    let mean = f64::from(profile.total()) / n;
    profile
        .counts()
        .iter()
        .map(|&c| {
            let d = f64::from(c) - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Smallest population variance any profile with `total` rounds can have.
///
/// The even split puts `total % 4` roles one above the rest, giving
/// `r * (4 - r) / 16`.
pub fn ideal_variance(total: u32) -> f64 {
    let n = Role::COUNT as u32;
    let r = total % n;
    f64::from(r * (n - r)) / f64::from(n * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn eval<C: CostFunction>(rule: C, role: usize, counts: [u32; 4]) -> f64 {
        let role = Role::from_index(role).unwrap();
        rule.evaluate(role, &RoleProfile::new(counts)).unwrap()
    }

    #[test]
    fn test_penalty() {
        // fresh competitor: any first role is balanced
        for r in 0..4 {
            assert_eq!(eval(Penalty, r, [0, 0, 0, 0]), 0.0);
        }
        assert_eq!(eval(Penalty, 3, [0, 0, 0, 2]), 36.0);
        assert_eq!(eval(Penalty, 0, [0, 0, 0, 2]), 4.0);
    }

    #[test]
    fn test_penalty_out_of_table() {
        let err = Penalty
            .evaluate(Role::OpeningGovernment, &RoleProfile::new([9, 0, 0, 0]))
            .unwrap_err();
        assert!(matches!(err, DrawError::UnsupportedProfile { .. }));
    }

    #[test]
    fn test_range() {
        assert_eq!(eval(Range, 0, [2, 0, 1, 0]), 2.0);
        assert_eq!(eval(Range, 1, [2, 0, 1, 0]), 0.0);
        assert_eq!(eval(Range, 2, [2, 0, 1, 0]), 1.0);
        // no table limit
        assert_eq!(eval(Range, 0, [20, 5, 5, 5]), 15.0);
    }

    #[test]
    fn test_entropy() {
        assert!((eval(Entropy, 0, [0, 0, 0, 0]) - 2.0).abs() < EPS);
        assert!(eval(Entropy, 3, [1, 1, 1, 0]).abs() < EPS);
        // concentrating is worse than spreading
        assert!(eval(Entropy, 0, [1, 0, 0, 0]) > eval(Entropy, 1, [1, 0, 0, 0]));
    }

    #[test]
    fn test_entropy_scales_by_total_after_round() {
        // [2,0,0,0]: H = 0, scaled by two rounds including this one
        assert!((eval(Entropy, 0, [1, 0, 0, 0]) - 4.0).abs() < EPS);
        // [1,1,0,0]: H = 1
        assert!((eval(Entropy, 1, [1, 0, 0, 0]) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_variance() {
        assert!((eval(Variance, 0, [0, 0, 0, 0]) - 0.1875).abs() < EPS);
        assert!((eval(Variance, 0, [1, 0, 0, 0]) - 0.75).abs() < EPS);
        assert!(eval(Variance, 3, [1, 1, 1, 0]).abs() < EPS);
    }

    #[test]
    fn test_adjusted_variance() {
        // remainder variance is unavoidable, so a first round costs nothing
        assert!(eval(AdjustedVariance, 2, [0, 0, 0, 0]).abs() < EPS);
        assert!((eval(AdjustedVariance, 0, [1, 0, 0, 0]) - 0.5).abs() < EPS);
        assert!(eval(AdjustedVariance, 1, [1, 0, 0, 0]).abs() < EPS);
    }

    #[test]
    fn test_ideal_variance() {
        assert_eq!(ideal_variance(0), 0.0);
        assert_eq!(ideal_variance(1), 3.0 / 16.0);
        assert_eq!(ideal_variance(2), 4.0 / 16.0);
        assert_eq!(ideal_variance(8), 0.0);
        for total in 0..20 {
            let q = total / 4;
            let r = total % 4;
            let mut counts = [q; 4];
            for c in counts.iter_mut().take(r as usize) {
                *c += 1;
            }
            let v = population_variance(&RoleProfile::new(counts));
            assert!((v - ideal_variance(total)).abs() < EPS);
        }
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(shannon_entropy_bits(&RoleProfile::zero()), 0.0);
        assert!((shannon_entropy_bits(&RoleProfile::new([1, 1, 0, 0])) - 1.0).abs() < EPS);
        assert!((shannon_entropy_bits(&RoleProfile::new([3, 3, 3, 3])) - 2.0).abs() < EPS);
    }
}
