//! Event Generator Configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::EventKind;

/// Per-tick event draw parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chance that a tick produces an event (default: 0.05)
    pub event_probability: f64,
    /// Chance that an event belongs to the home side (default: 0.6)
    pub home_bias: f64,
    /// Kinds drawn uniformly when an event fires (default: goal, yellow card, substitution)
    pub enabled_kinds: Vec<EventKind>,
    /// Also name an actor for cards, substitutions and injuries (default: false)
    pub name_all_actors: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            event_probability: 0.05,
            home_bias: 0.6,
            enabled_kinds: vec![EventKind::Goal, EventKind::YellowCard, EventKind::Substitution],
            name_all_actors: false,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        check_probability("event_probability", self.event_probability)?;
        check_probability("home_bias", self.home_bias)?;

        if self.enabled_kinds.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "at least one event kind must be enabled".into(),
            ));
        }
        if let Some(kind) = self.enabled_kinds.iter().find(|k| k.is_whistle()) {
            return Err(SimulationError::InvalidConfig(format!(
                "{:?} is emitted by the runner and cannot be drawn",
                kind
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SimulationError::InvalidConfig(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_observed_odds() {
        let cfg = GeneratorConfig::default();
        assert!((cfg.event_probability - 0.05).abs() < f64::EPSILON);
        assert!((cfg.home_bias - 0.6).abs() < f64::EPSILON);
        assert_eq!(cfg.enabled_kinds.len(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_probabilities() {
        let cfg = GeneratorConfig { event_probability: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = GeneratorConfig { home_bias: -0.1, ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = GeneratorConfig { event_probability: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_whistles_and_empty_sets() {
        let cfg = GeneratorConfig { enabled_kinds: vec![], ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = GeneratorConfig {
            enabled_kinds: vec![EventKind::Goal, EventKind::FullTime],
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("FullTime"));
    }
}
