//! Trial points: immutable candidate solutions.

use serde::{Deserialize, Serialize};

/// An immutable assignment of one value per problem variable.
///
/// Values are indexed by the problem's variable order. A fresh point is
/// produced on every proposal and never mutated after construction; equality
/// is by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPoint {
    values: Vec<f64>,
}

impl TrialPoint {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Value of the variable at `index`. Panics on an out-of-range index,
    /// which indicates a point paired with the wrong problem.
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for TrialPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

/// Builder used while composing a trial point; frozen into a [`TrialPoint`]
/// once every entry is set.
#[derive(Debug, Clone)]
pub struct MutableTrialPoint {
    values: Vec<f64>,
}

impl MutableTrialPoint {
    /// Start from all-zero values for a problem of `len` variables.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Start from an existing point's values (the usual baseline case).
    pub fn from_point(point: &TrialPoint) -> Self {
        Self {
            values: point.values.clone(),
        }
    }

    pub fn set_value(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    pub fn freeze(self) -> TrialPoint {
        TrialPoint {
            values: self.values,
        }
    }
}
