//! Initial search-range hints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::variable::Variable;

/// Externally supplied guidance for a variable's initial search range.
///
/// A hint is advisory: it seeds the shrink strategy's windows but is always
/// intersected with the variable's global limits before use. Variables the
/// hint says nothing about fall back to their full global range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainHint {
    /// Absolute `[lower, upper]` ranges keyed by variable name.
    Domain { ranges: HashMap<String, (f64, f64)> },

    /// Symmetric half-width around each variable's initial value, with an
    /// optional default applied to variables that have no explicit entry.
    Delta {
        default: Option<f64>,
        overrides: HashMap<String, f64>,
    },
}

impl DomainHint {
    /// An absolute-domain hint with no entries yet.
    pub fn domain() -> Self {
        Self::Domain {
            ranges: HashMap::new(),
        }
    }

    /// A delta hint applying `default` around every variable's initial value.
    pub fn delta(default: f64) -> Self {
        Self::Delta {
            default: Some(default),
            overrides: HashMap::new(),
        }
    }

    /// Add an absolute range for one variable (no-op on a delta hint).
    pub fn with_range(mut self, name: impl Into<String>, lower: f64, upper: f64) -> Self {
        if let Self::Domain { ranges } = &mut self {
            ranges.insert(name.into(), (lower, upper));
        }
        self
    }

    /// Add a per-variable half-width override (no-op on a domain hint).
    pub fn with_delta(mut self, name: impl Into<String>, delta: f64) -> Self {
        if let Self::Delta { overrides, .. } = &mut self {
            overrides.insert(name.into(), delta);
        }
        self
    }

    /// Whether this is a delta-style hint (preferred at window construction).
    pub fn is_delta(&self) -> bool {
        matches!(self, Self::Delta { .. })
    }

    /// The suggested `(lower, upper)` search range for `variable`.
    pub fn range(&self, variable: &Variable) -> (f64, f64) {
        match self {
            Self::Domain { ranges } => ranges
                .get(variable.name())
                .copied()
                .unwrap_or_else(|| (variable.lower_limit(), variable.upper_limit())),
            Self::Delta { default, overrides } => {
                let delta = overrides.get(variable.name()).copied().or(*default);
                match delta {
                    Some(delta) => {
                        let center = variable.initial_value();
                        (center - delta, center + delta)
                    }
                    None => (variable.lower_limit(), variable.upper_limit()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable() -> Variable {
        Variable::new("x", 0.0, 10.0, 5.0).unwrap()
    }

    #[test]
    fn domain_hint_returns_stored_range() {
        let hint = DomainHint::domain().with_range("x", 2.0, 4.0);
        assert_eq!(hint.range(&variable()), (2.0, 4.0));
    }

    #[test]
    fn domain_hint_falls_back_to_global_range() {
        let hint = DomainHint::domain().with_range("other", 2.0, 4.0);
        assert_eq!(hint.range(&variable()), (0.0, 10.0));
    }

    #[test]
    fn delta_hint_centers_on_initial_value() {
        let hint = DomainHint::delta(1.5);
        assert_eq!(hint.range(&variable()), (3.5, 6.5));
    }

    #[test]
    fn delta_override_beats_default() {
        let hint = DomainHint::delta(1.5).with_delta("x", 0.5);
        assert_eq!(hint.range(&variable()), (4.5, 5.5));
    }

    #[test]
    fn empty_delta_hint_falls_back_to_global_range() {
        let hint = DomainHint::Delta {
            default: None,
            overrides: HashMap::new(),
        };
        assert_eq!(hint.range(&variable()), (0.0, 10.0));
    }

    #[test]
    fn delta_hint_may_exceed_global_limits() {
        // Hints are advisory; clamping happens at window construction.
        let hint = DomainHint::delta(100.0);
        assert_eq!(hint.range(&variable()), (-95.0, 105.0));
    }

    #[test]
    fn serde_round_trip() {
        let hint = DomainHint::delta(1.0).with_delta("x", 0.25);
        let json = serde_json::to_string(&hint).unwrap();
        let back: DomainHint = serde_json::from_str(&json).unwrap();
        assert_eq!(hint, back);
    }
}
