//! Input validation for draw generation.
//!
//! Checks structural integrity of the competitor list before any bracket
//! or matrix work begins. Detects:
//! - Duplicate IDs
//! - Empty IDs
//! - Competitor counts that cannot fill whole rooms
//!
//! Malformed role histories are rejected earlier, when a history is turned
//! into a [`RoleProfile`](crate::models::RoleProfile).

use crate::models::{Competitor, Role};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two competitors share the same ID, or one is seated twice.
    DuplicateId,
    /// A competitor has an empty ID.
    EmptyId,
    /// Competitor count is not a multiple of the room size.
    IndivisibleCount,
    /// A role history does not have exactly four entries.
    MalformedProfile,
    /// A cost function produced NaN or infinity.
    NonFiniteCost,
    /// Matrix dimensions disagree with each other or with the draw inputs.
    NonSquareMatrix,
    /// A room is missing a role or has roles out of order.
    IncompleteRoom,
    /// A competitor sits in a room outside its bracket.
    BracketViolation,
    /// A seat's resulting profile does not match its role.
    ProfileMismatch,
    /// A seated competitor is not part of the input.
    UnknownCompetitor,
    /// An input competitor has no seat.
    UnseatedCompetitor,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the active competitors of a draw.
///
/// Checks:
/// 1. No empty competitor IDs
/// 2. No duplicate competitor IDs
/// 3. Competitor count is divisible by the room size (4)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_competitors(competitors: &[Competitor]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for c in competitors {
        if c.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Competitor with rank {} has an empty ID", c.rank),
            ));
        }
        if !ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate competitor ID: {}", c.id),
            ));
        }
    }

    if competitors.len() % Role::COUNT != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::IndivisibleCount,
            format!(
                "{} competitors cannot fill rooms of {}",
                competitors.len(),
                Role::COUNT
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_competitors() -> Vec<Competitor> {
        vec![
            Competitor::new("A", 3),
            Competitor::new("B", 3),
            Competitor::new("C", 2),
            Competitor::new("D", 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_competitors(&sample_competitors()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_competitors(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut competitors = sample_competitors();
        competitors[3].id = "A".into();

        let errors = validate_competitors(&competitors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_id() {
        let mut competitors = sample_competitors();
        competitors[0].id = "  ".into();

        let errors = validate_competitors(&competitors).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_indivisible_count() {
        let mut competitors = sample_competitors();
        competitors.push(Competitor::new("E", 0));

        let errors = validate_competitors(&competitors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IndivisibleCount));
    }

    #[test]
    fn test_multiple_errors() {
        let competitors = vec![Competitor::new("A", 1), Competitor::new("A", 1)];
        let errors = validate_competitors(&competitors).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
