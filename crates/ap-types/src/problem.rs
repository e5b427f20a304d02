//! Problem definition: the ordered variable list and its hints.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::ProblemError;
use crate::hint::DomainHint;
use crate::point::TrialPoint;
use crate::variable::Variable;

/// The full optimization problem as seen by the search core: an ordered list
/// of variables plus any registered search-range hints.
///
/// Variable order is stable for the life of a run and carries no semantic
/// tie-break; it only fixes the value layout of trial points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    variables: Vec<Variable>,
    hints: Vec<DomainHint>,
}

impl Problem {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn add_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn add_hint(mut self, hint: DomainHint) -> Self {
        self.hints.push(hint);
        self
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, index: usize) -> &Variable {
        &self.variables[index]
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The point holding every variable's initial value.
    pub fn initial_point(&self) -> TrialPoint {
        TrialPoint::new(self.variables.iter().map(|v| v.initial_value()).collect())
    }

    /// The suggested initial search range for the variable at `index`.
    ///
    /// A delta hint is preferred over an absolute-domain hint; with no hints
    /// registered the variable's full global range is returned. The result is
    /// advisory and may exceed the global limits.
    pub fn initial_range(&self, index: usize) -> (f64, f64) {
        let variable = &self.variables[index];
        let hint = self
            .hints
            .iter()
            .find(|h| h.is_delta())
            .or_else(|| self.hints.first());
        match hint {
            Some(hint) => hint.range(variable),
            None => (variable.lower_limit(), variable.upper_limit()),
        }
    }

    /// Reject problems the search core cannot run against: no variables (the
    /// per-variable change probability would divide by zero) or ambiguous
    /// duplicate names.
    pub fn validate(&self) -> Result<(), ProblemError> {
        if self.variables.is_empty() {
            return Err(ProblemError::NoVariables);
        }
        let mut seen = HashSet::new();
        for variable in &self.variables {
            if !seen.insert(variable.name()) {
                return Err(ProblemError::DuplicateVariable {
                    name: variable.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}
