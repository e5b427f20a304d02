//! Search strategies for proposing trial points.
//!
//! Three interchangeable [`Searcher`] variants share one composition loop: a
//! random subset of variables is selected for change, and each selected
//! variable gets a fresh value from the variant's sampling rule. The variants
//! differ only in where that value comes from: the full global range
//! ([`RandomSearcher`]), an adaptive per-variable window that re-centers on
//! every improvement ([`ShrinkSearcher`]), or a per-variable probabilistic
//! blend of the two ([`ComboSearcher`]).

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use ap_types::{MutableTrialPoint, Problem, TrialPoint};

use crate::window::VariableWindow;

/// Fraction of per-variable proposals the combo strategy serves from the
/// shrink window; the remainder re-samples the full global range so windows
/// cannot collapse around a local optimum.
pub const SHRINK_THRESHOLD: f64 = 0.9;

/// A strategy that proposes trial points and reacts to newly confirmed best
/// solutions.
///
/// Each searcher owns its private random stream; nothing is shared between
/// variants, so a fixed seed makes the proposal sequence exactly reproducible
/// given the same sequence of external events.
pub trait Searcher {
    /// Forget adaptive history and rebuild any windows from the problem's
    /// hints.
    fn reset(&mut self);

    /// React to a newly confirmed best solution. `old_best` is the point the
    /// improvement was measured against.
    fn new_top_solution(&mut self, old_best: &TrialPoint, new_best: &TrialPoint);

    /// Propose a fresh value for the variable at `index`.
    fn propose_value(&mut self, index: usize) -> f64;

    /// Next uniform `[0, 1)` draw from this searcher's private stream, used
    /// by the composition loop to select which variables change.
    fn selection_sample(&mut self) -> f64;

    /// The current search window for the variable at `index`, if this
    /// strategy keeps one.
    fn search_window(&self, _index: usize) -> Option<VariableWindow> {
        None
    }

    /// Compose the next trial point from the current best point.
    ///
    /// Every variable is independently selected for change with probability
    /// `expected_changes / N`, starting from one expected change. If a round
    /// selects nothing, the expected count is redrawn from `1..=N` and the
    /// round repeats; at `N` every variable changes, so the loop terminates
    /// and the returned point always differs from the baseline in at least
    /// one variable.
    fn next_trial_point(&mut self, best_point: &TrialPoint) -> TrialPoint {
        let num_variables = best_point.len();
        let change_probability_base = 1.0 / num_variables as f64;
        let mut expected_changes = 1usize;

        loop {
            let change_probability = expected_changes as f64 * change_probability_base;
            let mut values = MutableTrialPoint::from_point(best_point);
            let mut changed = false;

            for index in 0..num_variables {
                if self.selection_sample() <= change_probability {
                    changed = true;
                    values.set_value(index, self.propose_value(index));
                }
            }

            if changed {
                return values.freeze();
            }

            expected_changes = 1 + (self.selection_sample() * num_variables as f64) as usize;
        }
    }
}

/// Uniform sampling across the full global bounds of each selected variable.
///
/// Carries no adaptive memory: confirmed improvements do not change how it
/// samples.
pub struct RandomSearcher {
    problem: Problem,
    rng: StdRng,
}

impl RandomSearcher {
    pub fn new(problem: Problem, seed: u64) -> Self {
        Self {
            problem,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Searcher for RandomSearcher {
    fn reset(&mut self) {}

    fn new_top_solution(&mut self, _old_best: &TrialPoint, _new_best: &TrialPoint) {}

    fn propose_value(&mut self, index: usize) -> f64 {
        let variable = self.problem.variable(index);
        let raw: f64 = self.rng.random();
        variable.lower_limit() + raw * variable.range()
    }

    fn selection_sample(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Window-based sampling that narrows around the trail of best points.
///
/// Each variable keeps its own window, seeded from the problem's hints and
/// clamped into the global limits. Whenever a variable's value changes
/// between successive best points, its window re-centers on the new value
/// with half-width `3 * |change|`, so the window tracks the direction of
/// recent progress and narrows as improvements get smaller.
/// A variable whose value did not change keeps its window as is,
/// so the window may also grow when a variable is still moving in large
/// steps.
pub struct ShrinkSearcher {
    problem: Problem,
    rng: StdRng,
    windows: Vec<VariableWindow>,
}

impl ShrinkSearcher {
    pub fn new(problem: Problem, seed: u64) -> Self {
        let windows = Self::build_windows(&problem);
        Self {
            problem,
            rng: StdRng::seed_from_u64(seed),
            windows,
        }
    }

    /// Seed one window per variable from the hint range intersected with the
    /// variable's global limits.
    fn build_windows(problem: &Problem) -> Vec<VariableWindow> {
        problem
            .variables()
            .iter()
            .enumerate()
            .map(|(index, variable)| {
                let (lower, upper) = problem.initial_range(index);
                VariableWindow::clamped(lower, upper, variable.lower_limit(), variable.upper_limit())
            })
            .collect()
    }
}

impl Searcher for ShrinkSearcher {
    fn reset(&mut self) {
        self.windows = Self::build_windows(&self.problem);
    }

    fn new_top_solution(&mut self, old_best: &TrialPoint, new_best: &TrialPoint) {
        for (index, variable) in self.problem.variables().iter().enumerate() {
            let old_value = old_best.value(index);
            let new_value = new_best.value(index);

            if old_value == new_value {
                continue;
            }

            let half_width = 3.0 * (new_value - old_value).abs();
            let window = &mut self.windows[index];
            window.recenter(
                new_value,
                half_width,
                variable.lower_limit(),
                variable.upper_limit(),
            );
            debug!(
                variable = variable.name(),
                lower = window.lower(),
                upper = window.upper(),
                "re-centered search window"
            );
        }
    }

    fn propose_value(&mut self, index: usize) -> f64 {
        let window = self.windows[index];
        let raw: f64 = self.rng.random();
        window.lower() + raw * window.width()
    }

    fn selection_sample(&mut self) -> f64 {
        self.rng.random()
    }

    fn search_window(&self, index: usize) -> Option<VariableWindow> {
        self.windows.get(index).copied()
    }
}

/// Per-variable probabilistic blend of shrink-window and full-range sampling.
///
/// Holds one searcher of each kind; window state always tracks the shrink
/// strategy. For every variable selected for change, one draw decides which
/// strategy supplies the value, so a single proposal can mix both.
pub struct ComboSearcher {
    shrink_searcher: ShrinkSearcher,
    random_searcher: RandomSearcher,
    rng: StdRng,
}

impl ComboSearcher {
    pub fn new(problem: Problem, seed: u64) -> Self {
        // Offset seeds keep the three streams distinct; no strategy ever
        // consumes another's draws.
        Self {
            shrink_searcher: ShrinkSearcher::new(problem.clone(), seed.wrapping_add(1)),
            random_searcher: RandomSearcher::new(problem, seed.wrapping_add(2)),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Searcher for ComboSearcher {
    fn reset(&mut self) {
        self.shrink_searcher.reset();
    }

    fn new_top_solution(&mut self, old_best: &TrialPoint, new_best: &TrialPoint) {
        self.shrink_searcher.new_top_solution(old_best, new_best);
    }

    fn propose_value(&mut self, index: usize) -> f64 {
        let selection: f64 = self.rng.random();
        if selection < SHRINK_THRESHOLD {
            self.shrink_searcher.propose_value(index)
        } else {
            self.random_searcher.propose_value(index)
        }
    }

    fn selection_sample(&mut self) -> f64 {
        self.rng.random()
    }

    fn search_window(&self, index: usize) -> Option<VariableWindow> {
        self.shrink_searcher.search_window(index)
    }
}
