//! Optimizable variable descriptors.

use serde::{Deserialize, Serialize};

use crate::errors::VariableError;

/// A single bounded scalar dimension of an optimization problem.
///
/// A variable is created once per problem and never changes afterwards; the
/// search core only reads it. Construction validates the bounds so malformed
/// definitions fail fast instead of propagating as silent bad sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    lower_limit: f64,
    upper_limit: f64,
    initial_value: f64,
}

impl Variable {
    /// Create a variable, validating `lower <= initial <= upper`.
    pub fn new(
        name: impl Into<String>,
        lower_limit: f64,
        upper_limit: f64,
        initial_value: f64,
    ) -> Result<Self, VariableError> {
        let name = name.into();

        // NaN limits fail both comparisons and are rejected here too.
        if !(lower_limit <= upper_limit) {
            return Err(VariableError::InvertedLimits {
                name,
                lower: lower_limit,
                upper: upper_limit,
            });
        }
        if !(lower_limit <= initial_value && initial_value <= upper_limit) {
            return Err(VariableError::InitialOutOfBounds {
                name,
                initial: initial_value,
                lower: lower_limit,
                upper: upper_limit,
            });
        }

        Ok(Self {
            name,
            lower_limit,
            upper_limit,
            initial_value,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_limit(&self) -> f64 {
        self.lower_limit
    }

    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Width of the full global range.
    pub fn range(&self) -> f64 {
        self.upper_limit - self.lower_limit
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}, {}] @ {}",
            self.name, self.lower_limit, self.upper_limit, self.initial_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_variable_construction() {
        let var = Variable::new("x", 0.0, 10.0, 5.0).unwrap();
        assert_eq!(var.name(), "x");
        assert_eq!(var.lower_limit(), 0.0);
        assert_eq!(var.upper_limit(), 10.0);
        assert_eq!(var.initial_value(), 5.0);
        assert_eq!(var.range(), 10.0);
    }

    #[test]
    fn inverted_limits_rejected() {
        let err = Variable::new("x", 5.0, 1.0, 3.0).unwrap_err();
        match err {
            VariableError::InvertedLimits { .. } => (),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn initial_value_outside_bounds_rejected() {
        let err = Variable::new("x", 0.0, 1.0, 2.0).unwrap_err();
        match err {
            VariableError::InitialOutOfBounds { .. } => (),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_limits_rejected() {
        assert!(Variable::new("x", f64::NAN, 1.0, 0.5).is_err());
        assert!(Variable::new("x", 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn initial_value_at_bounds_accepted() {
        assert!(Variable::new("lo", 0.0, 1.0, 0.0).is_ok());
        assert!(Variable::new("hi", 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let var = Variable::new("phase", -3.14, 3.14, 0.0).unwrap();
        let json = serde_json::to_string(&var).unwrap();
        let back: Variable = serde_json::from_str(&json).unwrap();
        assert_eq!(var, back);
    }
}
