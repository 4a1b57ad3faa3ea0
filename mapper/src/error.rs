//! Error kinds reported by the mapper.
//!
//! Decoding and semantic validation are distinct: a [`DecodeError`] means a
//! serialized input never reached validation, a [`ValidationError`] means it
//! decoded but broke an invariant. Both carry the offending field so callers
//! can react programmatically.

use wig_taxonomy::NotFound;

/// A serialized input could not be parsed into its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode {field}: {message}")]
pub struct DecodeError {
    /// Input that failed to decode (e.g., `"layers"`).
    pub field: &'static str,
    /// Parser message.
    pub message: String,
}

impl DecodeError {
    /// Wraps a `serde_json` error for `field`.
    #[must_use]
    pub fn json(field: &'static str, err: &serde_json::Error) -> Self {
        DecodeError {
            field,
            message: err.to_string(),
        }
    }
}

/// A decoded input violated a documented invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An id outside the fixed enumerated set.
    #[error("unknown {field} {value:?}; expected one of: {}", .valid.join(", "))]
    UnknownTaxonomyId {
        /// Field that carried the id.
        field: &'static str,
        /// The supplied id.
        value: String,
        /// Every id the field accepts.
        valid: Vec<&'static str>,
    },
    /// A numeric (or otherwise bounded) field outside its range.
    #[error("{field} = {value} is out of range; expected {constraint}")]
    Range {
        /// Field that is out of range.
        field: &'static str,
        /// The supplied value, rendered.
        value: String,
        /// The valid range, rendered.
        constraint: String,
    },
    /// A cross-field constraint was violated.
    #[error("{field}: {constraint}")]
    Consistency {
        /// Field whose presence or value conflicts with another.
        field: &'static str,
        /// The violated constraint.
        constraint: &'static str,
    },
}

impl ValidationError {
    /// Converts a taxonomy lookup miss on `field` into [`ValidationError::UnknownTaxonomyId`].
    #[must_use]
    pub fn unknown(field: &'static str, err: NotFound) -> Self {
        ValidationError::UnknownTaxonomyId {
            field,
            value: err.id,
            valid: err.available,
        }
    }

    /// Builds a [`ValidationError::Range`] from any displayable value.
    #[must_use]
    pub fn range(
        field: &'static str,
        value: impl std::fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        ValidationError::Range {
            field,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Returns the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::UnknownTaxonomyId { field, .. }
            | ValidationError::Range { field, .. }
            | ValidationError::Consistency { field, .. } => *field,
        }
    }
}

/// Any failure of an entry point that accepts serialized input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The input decoded but is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use wig_taxonomy::TaxonomyKind;

    #[test]
    fn lookup_miss_becomes_unknown_id() {
        let miss = NotFound {
            kind: TaxonomyKind::CapConstruction,
            id: "silk_top".to_owned(),
            available: vec!["lace_front", "wefted"],
        };
        let err = ValidationError::unknown("cap_construction", miss);
        assert_eq!(err.field(), "cap_construction");
        assert_eq!(
            err.to_string(),
            "unknown cap_construction \"silk_top\"; expected one of: lace_front, wefted"
        );
    }

    #[test]
    fn range_message_names_value_and_bounds() {
        let err = ValidationError::range("density_profile", 2.5, "[0.5, 2.0]");
        assert_eq!(
            err.to_string(),
            "density_profile = 2.5 is out of range; expected [0.5, 2.0]"
        );
    }
}
