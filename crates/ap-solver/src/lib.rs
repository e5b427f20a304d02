//! # ap-solver
//!
//! Adaptive stochastic search core for Aperture.
//!
//! Provides the searcher strategy variants (random, shrink, combo), the
//! per-variable adaptive windows that narrow around each confirmed
//! improvement, and the engine driver an external scoring harness calls to
//! obtain trial points and report new best solutions.

mod config;
mod engine;
mod search;
mod window;

pub use config::{EngineConfig, StrategyKind, DEFAULT_SEED};
pub use engine::{RunTerminated, SearchEngine, TrialEvaluator};
pub use search::{ComboSearcher, RandomSearcher, Searcher, ShrinkSearcher, SHRINK_THRESHOLD};
pub use window::VariableWindow;
