//! The engine driver an external scoring harness talks to.

use thiserror::Error;
use tracing::{debug, info};

use ap_types::{ApResult, Problem, TrialPoint};

use crate::config::{EngineConfig, StrategyKind};
use crate::search::{ComboSearcher, RandomSearcher, Searcher, ShrinkSearcher};
use crate::window::VariableWindow;

/// Signals that the surrounding run stopped while a trial point was being
/// scored. Expected control flow, not a failure: the engine swallows it and
/// discards the proposal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("run terminated during trial evaluation")]
pub struct RunTerminated;

/// Caller-supplied scoring harness boundary.
///
/// The evaluator scores the point by its own judgment and later reports
/// strictly-better solutions back through
/// [`SearchEngine::found_new_optimal_solution`]; the engine never sees
/// objective values.
pub trait TrialEvaluator {
    fn evaluate_trial_point(&mut self, point: &TrialPoint) -> Result<(), RunTerminated>;
}

/// Drives one search strategy against one problem.
///
/// The engine owns the current best point and the active searcher. The
/// harness calls [`next_trial_point`](Self::next_trial_point) to get a
/// candidate, scores it externally, and reports any strictly-better point via
/// [`found_new_optimal_solution`](Self::found_new_optimal_solution).
/// Everything is synchronous and single-threaded; at most one proposal is in
/// flight at a time.
pub struct SearchEngine {
    problem: Problem,
    config: EngineConfig,
    searcher: Box<dyn Searcher>,
    best_point: Option<TrialPoint>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("problem", &self.problem)
            .field("config", &self.config)
            .field("best_point", &self.best_point)
            .finish_non_exhaustive()
    }
}

impl SearchEngine {
    /// Build an engine for `problem`. Fails fast on a problem the strategies
    /// cannot run against (no variables, duplicate names).
    pub fn new(problem: Problem, config: EngineConfig) -> ApResult<Self> {
        problem.validate()?;
        let searcher = Self::build_searcher(&problem, &config);
        info!(
            strategy = %config.strategy,
            variables = problem.len(),
            "search engine ready"
        );
        Ok(Self {
            problem,
            config,
            searcher,
            best_point: None,
        })
    }

    fn build_searcher(problem: &Problem, config: &EngineConfig) -> Box<dyn Searcher> {
        match config.strategy {
            StrategyKind::Random => Box::new(RandomSearcher::new(problem.clone(), config.seed)),
            StrategyKind::Shrink => Box::new(ShrinkSearcher::new(problem.clone(), config.seed)),
            StrategyKind::Combo => Box::new(ComboSearcher::new(problem.clone(), config.seed)),
        }
    }

    /// Human-readable label for this search algorithm.
    pub fn label(&self) -> &'static str {
        "random shrink search"
    }

    /// How well this algorithm performs on global searches, 0 to 10.
    pub fn global_rating(&self) -> u8 {
        8
    }

    /// How well this algorithm performs on local searches, 0 to 10.
    pub fn local_rating(&self) -> u8 {
        5
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The most recent point confirmed best by the harness, or the initial
    /// point after a reset. `None` only before the first reset or report.
    pub fn best_point(&self) -> Option<&TrialPoint> {
        self.best_point.as_ref()
    }

    /// The active strategy's current window for the variable at `index`
    /// (`None` for the pure random strategy, which keeps no windows).
    pub fn search_window(&self, index: usize) -> Option<VariableWindow> {
        self.searcher.search_window(index)
    }

    /// Start searching from scratch: fresh windows, fresh random streams,
    /// best point back to the variables' initial values. All adaptive
    /// history is forgotten.
    pub fn reset(&mut self) {
        self.searcher = Self::build_searcher(&self.problem, &self.config);
        self.best_point = Some(self.problem.initial_point());
        debug!("search state reset to initial values");
    }

    /// Compose the next candidate point for the harness to score.
    pub fn next_trial_point(&mut self) -> TrialPoint {
        let baseline = match self.best_point.as_ref() {
            Some(best) => best.clone(),
            None => self.problem.initial_point(),
        };
        self.searcher.next_trial_point(&baseline)
    }

    /// Record a point the harness judged strictly better than everything
    /// seen so far. The harness's judgment is trusted and never re-checked.
    ///
    /// The searcher is informed of the old/new pair before the best point is
    /// overwritten, so the adaptation rule always sees the true transition.
    /// The very first reported solution is adopted as is; there is no prior
    /// point to adapt against.
    pub fn found_new_optimal_solution(&mut self, new_point: TrialPoint) {
        debug_assert_eq!(new_point.len(), self.problem.len());

        if let Some(old_point) = self.best_point.take() {
            self.searcher.new_top_solution(&old_point, &new_point);
        }
        debug!(point = %new_point, "adopted new best point");
        self.best_point = Some(new_point);
    }

    /// Propose one point and hand it to the evaluator. A run-termination
    /// outcome raised while scoring ends the attempt silently; the proposal
    /// is simply discarded.
    pub fn propose_and_evaluate(&mut self, evaluator: &mut dyn TrialEvaluator) {
        let point = self.next_trial_point();
        if evaluator.evaluate_trial_point(&point).is_err() {
            debug!("trial evaluation terminated early");
        }
    }
}
