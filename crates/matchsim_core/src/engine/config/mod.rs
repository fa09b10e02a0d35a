//! # Simulation Configuration
//!
//! All tunable constants of a run in one serde-friendly struct. The defaults
//! reproduce the odds and pacing of the tactics page; presets adjust them.
//!
//! ```rust
//! use matchsim_core::engine::config::SimulationConfig;
//!
//! let config = SimulationConfig::default();
//! let lively = SimulationConfig::lively();
//! assert!(lively.generator.event_probability > config.generator.event_probability);
//! ```

mod clock_config;
mod generator_config;

pub use clock_config::{ClockConfig, MAX_STOPPAGE_MINUTES};
pub use generator_config::GeneratorConfig;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::EventKind;

/// Real-time delay between ticks when running live (default: 100ms)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub clock: ClockConfig,
    pub generator: GeneratorConfig,
    /// Pause between ticks for live pacing. Ignored by immediate runs.
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            generator: GeneratorConfig::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    /// Odds and pacing as observed on the tactics page.
    pub fn observed() -> Self {
        Self::default()
    }

    /// More incidents, every drawable kind enabled, named actors.
    pub fn lively() -> Self {
        let mut cfg = Self::default();
        cfg.generator.event_probability = 0.15;
        cfg.generator.enabled_kinds = EventKind::DRAWABLE.to_vec();
        cfg.generator.name_all_actors = true;
        cfg.clock.stoppage_minutes = 4;
        cfg
    }

    /// Sparse events, one-minute ticks.
    pub fn quiet() -> Self {
        let mut cfg = Self::default();
        cfg.generator.event_probability = 0.02;
        cfg.clock.step_minutes = 1;
        cfg
    }

    /// No pacing delay; otherwise observed odds.
    pub fn test() -> Self {
        Self { tick_interval_ms: 0, ..Self::default() }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "observed" | "default" => Some(Self::observed()),
            "lively" => Some(Self::lively()),
            "quiet" => Some(Self::quiet()),
            "test" => Some(Self::test()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.clock.validate()?;
        self.generator.validate()
    }

    /// Parse and validate a JSON config. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

// ========== Tests ==========
