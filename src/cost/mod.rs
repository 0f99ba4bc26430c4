//! Seat cost functions.
//!
//! A cost function scores how unfair it would be to give a competitor a
//! particular role, given the roles it has already held. The draw is the
//! assignment that minimizes the sum of these costs.
//!
//! # Usage
//!
//! ```
//! use u_draw::cost::{CostFunctionKind, CostModel};
//! use u_draw::models::{Role, RoleProfile};
//!
//! let model = CostModel::new(CostFunctionKind::Penalty).with_exponent(2.0);
//! let cost = model.evaluate(Role::ClosingOpposition, &RoleProfile::new([0, 0, 0, 2]))?;
//! assert_eq!(cost, 1296.0); // 36^2
//! # Ok::<(), u_draw::DrawError>(())
//! ```
//!
//! # References
//!
//! - Tabbie2 BP position badness table

pub mod penalty;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::error::DrawError;
use crate::models::{Role, RoleProfile};

/// Cost of seating a competitor in a role. Lower is fairer.
pub type Cost = f64;

/// A cost function over (role, current profile).
///
/// # Cost Convention
/// **Lower cost = fairer seat.** Implementations must return finite,
/// non-negative values for every profile they support.
pub trait CostFunction: Send + Sync + Debug {
    /// Function name (e.g., "PENALTY", "VARIANCE").
    fn name(&self) -> &'static str;

    /// Cost of giving `role` to a competitor whose history is `profile`.
    fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError>;

    /// Function description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selectable built-in cost functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostFunctionKind {
    /// [`rules::Penalty`]
    #[default]
    Penalty,
    /// [`rules::Range`]
    Range,
    /// [`rules::Entropy`]
    Entropy,
    /// [`rules::Variance`]
    Variance,
    /// [`rules::AdjustedVariance`]
    AdjustedVariance,
}

impl CostFunctionKind {
    /// All built-in kinds.
    pub const ALL: [CostFunctionKind; 5] = [
        CostFunctionKind::Penalty,
        CostFunctionKind::Range,
        CostFunctionKind::Entropy,
        CostFunctionKind::Variance,
        CostFunctionKind::AdjustedVariance,
    ];

    /// The cost function implementing this kind.
    pub fn function(self) -> &'static dyn CostFunction {
        match self {
            CostFunctionKind::Penalty => &rules::Penalty,
            CostFunctionKind::Range => &rules::Range,
            CostFunctionKind::Entropy => &rules::Entropy,
            CostFunctionKind::Variance => &rules::Variance,
            CostFunctionKind::AdjustedVariance => &rules::AdjustedVariance,
        }
    }
}

impl fmt::Display for CostFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function().name())
    }
}

/// A cost function together with an optional sensitivity exponent.
///
/// Resolved once per draw and passed explicitly to the matrix builder.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    function: &'static dyn CostFunction,
    kind: CostFunctionKind,
    exponent: Option<f64>,
}

impl CostModel {
    /// Creates a model using the given built-in function, no exponent.
    pub fn new(kind: CostFunctionKind) -> Self {
        Self {
            function: kind.function(),
            kind,
            exponent: None,
        }
    }

    /// Raises every cost to `exponent`.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// Sets or clears the exponent.
    pub fn with_optional_exponent(mut self, exponent: Option<f64>) -> Self {
        self.exponent = exponent;
        self
    }

    /// The built-in function kind.
    pub fn kind(&self) -> CostFunctionKind {
        self.kind
    }

    /// The configured exponent, if any.
    pub fn exponent(&self) -> Option<f64> {
        self.exponent
    }

    /// Cost of seating a competitor with `profile` in `role`.
    pub fn evaluate(&self, role: Role, profile: &RoleProfile) -> Result<Cost, DrawError> {
        let cost = self.function.evaluate(role, profile)?;
        Ok(match self.exponent {
            Some(e) => cost.powf(e),
            None => cost,
        })
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(CostFunctionKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(CostFunctionKind::Penalty.to_string(), "PENALTY");
        assert_eq!(
            CostFunctionKind::AdjustedVariance.to_string(),
            "ADJUSTED_VARIANCE"
        );
        assert_eq!(CostFunctionKind::default(), CostFunctionKind::Penalty);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&CostFunctionKind::AdjustedVariance).unwrap();
        assert_eq!(json, "\"adjusted-variance\"");
        let kind: CostFunctionKind = serde_json::from_str("\"entropy\"").unwrap();
        assert_eq!(kind, CostFunctionKind::Entropy);
    }

    #[test]
    fn test_model_without_exponent() {
        let model = CostModel::new(CostFunctionKind::Penalty);
        let cost = model
            .evaluate(Role::ClosingOpposition, &RoleProfile::new([0, 0, 0, 2]))
            .unwrap();
        assert_eq!(cost, 36.0);
        assert_eq!(model.exponent(), None);
    }

    #[test]
    fn test_model_with_exponent() {
        let model = CostModel::new(CostFunctionKind::Range).with_exponent(2.0);
        let cost = model
            .evaluate(Role::OpeningGovernment, &RoleProfile::new([3, 0, 1, 0]))
            .unwrap();
        assert_eq!(cost, 9.0);
        assert_eq!(model.kind(), CostFunctionKind::Range);
    }

    #[test]
    fn test_model_propagates_unsupported() {
        let model = CostModel::default();
        let result = model.evaluate(Role::OpeningGovernment, &RoleProfile::new([5, 5, 0, 0]));
        assert!(matches!(result, Err(DrawError::UnsupportedProfile { .. })));
    }

    #[test]
    fn test_every_kind_zero_profile_is_finite() {
        for kind in CostFunctionKind::ALL {
            let model = CostModel::new(kind);
            for role in Role::ALL {
                let cost = model.evaluate(role, &RoleProfile::zero()).unwrap();
                assert!(cost.is_finite() && cost >= 0.0, "{kind} {role}");
            }
        }
    }
}
