//! Handle-based entry points for a presentation layer.
//!
//! ```rust
//! use matchsim_core::api::{get_log, on_tick, start_simulation, SimulationOptions};
//!
//! let home = vec!["Haaland".to_string(), "De Bruyne".to_string()];
//! let away = vec!["Kane".to_string(), "Son".to_string()];
//! let mut handle = start_simulation(home, away, SimulationOptions::seeded(42)).unwrap();
//! while let Some(update) = on_tick(&mut handle).unwrap() {
//!     let _ = (update.minute, update.home_score, update.away_score);
//! }
//! assert_eq!(get_log(&handle).last().unwrap().minute, 90);
//! ```

use crate::engine::{Pacing, SimulationConfig, SimulationHandle, SimulationRunner, TickUpdate};
use crate::error::Result;
use crate::models::{MatchEvent, TeamSheet};

#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub seed: u64,
    pub config: SimulationConfig,
    /// Sleep `config.tick_interval_ms` before each tick.
    pub live: bool,
    pub home_name: String,
    pub away_name: String,
}

impl SimulationOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            config: SimulationConfig::default(),
            live: false,
            home_name: "Home".to_string(),
            away_name: "Away".to_string(),
        }
    }

    pub fn random() -> Self {
        Self::seeded(random_seed())
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn with_names(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_name = home.into();
        self.away_name = away.into();
        self
    }
}

/// Seed drawn from the thread-local generator, for runs started without one.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Create and start a seeded run for the two rosters.
pub fn start_simulation(
    home_roster: Vec<String>,
    away_roster: Vec<String>,
    options: SimulationOptions,
) -> Result<SimulationHandle> {
    let home = TeamSheet::new(options.home_name, home_roster);
    let away = TeamSheet::new(options.away_name, away_roster);
    start_simulation_with_sheets(home, away, options.seed, options.config, options.live)
}

/// Like [`start_simulation`], with full team sheets (names, tactics).
pub fn start_simulation_with_sheets(
    home: TeamSheet,
    away: TeamSheet,
    seed: u64,
    config: SimulationConfig,
    live: bool,
) -> Result<SimulationHandle> {
    let pacing = if live { Pacing::real_time_ms(config.tick_interval_ms) } else { Pacing::Immediate };
    let mut handle = SimulationRunner::seeded_with_pacing(config, home, away, seed, pacing)?;
    handle.start()?;
    Ok(handle)
}

/// Advance one tick. `None` once the final whistle has been reported.
pub fn on_tick(handle: &mut SimulationHandle) -> Result<Option<TickUpdate>> {
    handle.tick()
}

pub fn get_log(handle: &SimulationHandle) -> &[MatchEvent] {
    handle.log()
}
