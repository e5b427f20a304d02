//! Per-variable adaptive search windows.

use serde::{Deserialize, Serialize};

/// The current search bounds for one variable.
///
/// A window is always contained in its variable's global limits:
/// `global_lower <= lower <= upper <= global_upper`. Construction and every
/// update clamp into the limits, so hint or adaptation input can never break
/// containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableWindow {
    lower: f64,
    upper: f64,
}

impl VariableWindow {
    /// Build a window from an advisory `(lower, upper)` pair, reordering a
    /// reversed pair and clamping both ends into the global limits.
    pub fn clamped(lower: f64, upper: f64, global_lower: f64, global_upper: f64) -> Self {
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        Self {
            lower: lower.clamp(global_lower, global_upper),
            upper: upper.clamp(global_lower, global_upper),
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Re-center the window on `center` with the given half-width, clamped
    /// into the global limits.
    pub fn recenter(
        &mut self,
        center: f64,
        half_width: f64,
        global_lower: f64,
        global_upper: f64,
    ) {
        self.lower = (center - half_width).max(global_lower);
        self.upper = (center + half_width).min(global_upper);
    }
}

impl std::fmt::Display for VariableWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_respects_global_limits() {
        let window = VariableWindow::clamped(-5.0, 15.0, 0.0, 10.0);
        assert_eq!(window.lower(), 0.0);
        assert_eq!(window.upper(), 10.0);
    }

    #[test]
    fn clamped_reorders_reversed_pair() {
        let window = VariableWindow::clamped(8.0, 2.0, 0.0, 10.0);
        assert_eq!(window.lower(), 2.0);
        assert_eq!(window.upper(), 8.0);
    }

    #[test]
    fn clamped_collapses_range_outside_limits() {
        // Entirely below the global range: both ends pin to the lower limit.
        let window = VariableWindow::clamped(-8.0, -2.0, 0.0, 10.0);
        assert_eq!(window.lower(), 0.0);
        assert_eq!(window.upper(), 0.0);
        assert!(window.lower() <= window.upper());
    }

    #[test]
    fn recenter_sets_exact_bounds() {
        let mut window = VariableWindow::clamped(0.0, 10.0, 0.0, 10.0);
        window.recenter(6.0, 3.0, 0.0, 10.0);
        assert_eq!(window.lower(), 3.0);
        assert_eq!(window.upper(), 9.0);
    }

    #[test]
    fn recenter_clips_at_global_limits() {
        let mut window = VariableWindow::clamped(0.0, 7.0, 0.0, 7.0);
        window.recenter(6.0, 3.0, 0.0, 7.0);
        assert_eq!(window.lower(), 3.0);
        assert_eq!(window.upper(), 7.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let window = VariableWindow::clamped(2.0, 8.0, 0.0, 10.0);
        assert!(window.contains(2.0));
        assert!(window.contains(8.0));
        assert!(window.contains(5.0));
        assert!(!window.contains(1.9));
        assert!(!window.contains(8.1));
    }
}
