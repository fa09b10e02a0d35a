//! # matchsim_core - Seeded Football Match Event Simulation
//!
//! A small, deterministic match simulator: a clock ticks through ninety
//! minutes, an event generator occasionally produces goals, cards and
//! substitutions, and the runner keeps score and an ordered event log.
//!
//! ## Features
//! - Same seed, same match: randomness comes from a seeded `ChaCha8Rng`
//! - Pacing injected per run (zero-delay for tests, real-time for live feeds)
//! - Incremental per-tick updates and a full log valid mid-run
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tactics;

// Re-export main API functions
pub use api::{
    get_log, on_tick, random_seed, simulate_match, simulate_match_json, start_simulation,
    MatchRequest, MatchResponse, SimulationOptions,
};
pub use engine::{SimulationConfig, SimulationHandle, SimulationRunner, TickUpdate};
pub use error::{Result, SimulationError};
pub use models::{EventKind, MatchEvent, MatchState, MatchStatus, Side, TeamSheet};
pub use tactics::TacticsSheet;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_tactics_do_not_change_the_match() {
        let base = json!({
            "schema_version": 1,
            "seed": 2718,
            "home_team": { "name": "Home", "roster": ["Haaland", "De Bruyne"] },
            "away_team": { "name": "Away", "roster": ["Kane", "Son"] },
            "config": { "generator": { "event_probability": 0.3 } }
        });
        let mut tweaked = base.clone();
        tweaked["home_team"]["tactics"] = json!({
            "formation": "3-5-2",
            "playing_style": "attacking",
            "mentality": "attacking",
            "press_intensity": "gegenpress"
        });

        let a = simulate_match_json(&base.to_string()).unwrap();
        let b = simulate_match_json(&tweaked.to_string()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let run = |seed: u64| {
            let request = MatchRequest {
                config: Some(SimulationConfig::lively()),
                ..MatchRequest::new(
                    seed,
                    TeamSheet::from_roster("Home", ["Haaland"]),
                    TeamSheet::from_roster("Away", ["Kane"]),
                )
            };
            simulate_match(request).unwrap().events
        };
        let logs: Vec<_> = (0..8).map(run).collect();
        assert!(logs.windows(2).any(|w| w[0] != w[1]));
    }
}
