//! Draw generation errors.
//!
//! Every failure aborts the draw; no partial draw is ever returned.

use thiserror::Error;

use crate::models::RoleProfile;
use crate::validation::ValidationError;

/// Errors raised while generating a draw.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Input failed structural checks (count not divisible by four,
    /// duplicate IDs, malformed histories, non-finite costs).
    #[error("invalid draw input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The solver could only complete the matching through forbidden cells.
    ///
    /// Indicates inconsistent brackets or eligibility data.
    #[error("no feasible assignment: {forbidden_cells} competitor(s) forced outside their bracket")]
    InfeasibleAssignment {
        /// Number of forbidden cells in the returned matching.
        forbidden_cells: usize,
    },

    /// A profile lies outside the position-badness table.
    #[error("role profile {profile} is outside the position badness table")]
    UnsupportedProfile {
        /// The profile that was looked up.
        profile: RoleProfile,
    },

    /// A solved draw failed its post-conditions.
    #[error("draw invariant violated: {}", summarize(.0))]
    InvariantViolation(Vec<ValidationError>),

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl From<ValidationError> for DrawError {
    fn from(error: ValidationError) -> Self {
        DrawError::InvalidInput(vec![error])
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = DrawError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate competitor ID: A"),
            ValidationError::new(ValidationErrorKind::EmptyId, "Competitor ID is empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid draw input: Duplicate competitor ID: A; Competitor ID is empty"
        );
    }

    #[test]
    fn test_unsupported_profile_message() {
        let err = DrawError::UnsupportedProfile {
            profile: RoleProfile::new([0, 0, 0, 10]),
        };
        assert!(err.to_string().contains("0,0,0,10"));
    }

    #[test]
    fn test_from_validation_error() {
        let err: DrawError =
            ValidationError::new(ValidationErrorKind::MalformedProfile, "bad").into();
        assert!(matches!(err, DrawError::InvalidInput(ref v) if v.len() == 1));
    }
}
