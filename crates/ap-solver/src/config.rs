//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Seed used when none is configured. Fixed so that, given the same sequence
/// of external evaluation outcomes, proposal sequences are exactly
/// reproducible.
pub const DEFAULT_SEED: u64 = 0;

/// Which search strategy the engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Uniform sampling over the full global bounds.
    Random,
    /// Adaptive window sampling that narrows around improvements.
    Shrink,
    /// Per-variable blend of shrink (dominant) and random (escape).
    Combo,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Combo
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Shrink => write!(f, "shrink"),
            Self::Combo => write!(f, "combo"),
        }
    }
}

/// Top-level configuration for a search engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub strategy: StrategyKind,
    pub seed: u64,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            strategy: StrategyKind::default(),
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_combo() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, StrategyKind::Combo);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn builder_chain() {
        let config = EngineConfig::new()
            .with_strategy(StrategyKind::Random)
            .with_seed(99);
        assert_eq!(config.strategy, StrategyKind::Random);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn strategy_display_names() {
        assert_eq!(StrategyKind::Random.to_string(), "random");
        assert_eq!(StrategyKind::Shrink.to_string(), "shrink");
        assert_eq!(StrategyKind::Combo.to_string(), "combo");
    }

    #[test]
    fn serde_round_trip() {
        let config = EngineConfig::new().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
