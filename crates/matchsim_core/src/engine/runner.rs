//! Simulation Runner
//!
//! Drives one match tick by tick: clock, event draw, score, log. Callers
//! either pull ticks one at a time (live feeds) or run to completion.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::{Clock, Tick};
use super::config::SimulationConfig;
use super::dice::Dice;
use super::events::EventGenerator;
use super::pacing::{Pacing, TickPacer};
use crate::error::{Result, SimulationError};
use crate::models::{MatchEvent, MatchState, MatchStatus, TeamSheet, HALF_TIME_MINUTE};

/// What an observer sees after one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickUpdate {
    pub minute: u8,
    pub home_score: u8,
    pub away_score: u8,
    /// Events appended during this tick only.
    pub new_events: Vec<MatchEvent>,
    pub status: MatchStatus,
}

/// Seeded runner as handed out by the public API.
pub type SimulationHandle = SimulationRunner<ChaCha8Rng, Pacing>;

pub struct SimulationRunner<D: Dice, P: TickPacer> {
    id: Uuid,
    seed: Option<u64>,
    clock: Clock,
    generator: EventGenerator,
    dice: D,
    pacer: P,
    state: MatchState,
    half_time_recorded: bool,
    /// Log length already reported through `TickUpdate`s
    cursor: usize,
}

impl SimulationRunner<ChaCha8Rng, Pacing> {
    /// Zero-delay runner seeded with `seed`.
    pub fn seeded(
        config: SimulationConfig,
        home: TeamSheet,
        away: TeamSheet,
        seed: u64,
    ) -> Result<Self> {
        Self::seeded_with_pacing(config, home, away, seed, Pacing::Immediate)
    }

    /// Runner that sleeps `config.tick_interval_ms` before each tick.
    pub fn live(config: SimulationConfig, home: TeamSheet, away: TeamSheet, seed: u64) -> Result<Self> {
        let pacing = Pacing::real_time_ms(config.tick_interval_ms);
        Self::seeded_with_pacing(config, home, away, seed, pacing)
    }

    pub fn seeded_with_pacing(
        config: SimulationConfig,
        home: TeamSheet,
        away: TeamSheet,
        seed: u64,
        pacing: Pacing,
    ) -> Result<Self> {
        let mut runner = Self::new(config, home, away, ChaCha8Rng::seed_from_u64(seed), pacing)?;
        runner.seed = Some(seed);
        Ok(runner)
    }
}

impl<D: Dice, P: TickPacer> SimulationRunner<D, P> {
    pub fn new(
        config: SimulationConfig,
        home: TeamSheet,
        away: TeamSheet,
        dice: D,
        pacer: P,
    ) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            id: Uuid::new_v4(),
            seed: None,
            clock: Clock::new(&config.clock)?,
            generator: EventGenerator::new(config.generator)?,
            dice,
            pacer,
            state: MatchState::new(home, away),
            half_time_recorded: false,
            cursor: 0,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Full event history so far. Valid mid-run.
    pub fn log(&self) -> &[MatchEvent] {
        self.state.events()
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }

    pub fn start(&mut self) -> Result<()> {
        self.state.start()?;
        log::info!(
            "[{}] kick-off: {} vs {} (seed {:?})",
            self.id,
            self.state.home.name,
            self.state.away.name,
            self.seed
        );
        Ok(())
    }

    /// Advance one tick.
    ///
    /// Returns `Ok(None)` once the match is completed. Ticking a match that
    /// was never started is a usage error.
    pub fn tick(&mut self) -> Result<Option<TickUpdate>> {
        match self.state.status() {
            MatchStatus::NotStarted => {
                return Err(SimulationError::InvalidState { status: MatchStatus::NotStarted })
            }
            MatchStatus::Completed => return Ok(None),
            MatchStatus::Running => {}
        }

        match self.clock.advance()? {
            Tick::Minute(minute) => self.play_minute(minute),
            Tick::Finished => self.finish(),
        }

        Ok(Some(self.take_update()))
    }

    /// Tick until the final whistle and return the finished state.
    pub fn run_to_completion(&mut self) -> Result<&MatchState> {
        while self.tick()?.is_some() {}
        Ok(&self.state)
    }

    fn play_minute(&mut self, minute: u8) {
        self.pacer.pause(minute);
        self.state.set_minute(minute);

        // A clock that steps over 45 still owes the whistle before this tick's events.
        if minute > HALF_TIME_MINUTE {
            self.record_half_time();
        }

        if let Some(event) =
            self.generator.generate(minute, &self.state.home, &self.state.away, &mut self.dice)
        {
            log::debug!(
                "[{}] {}' {:?} {:?}: {}",
                self.id,
                minute,
                event.side,
                event.kind,
                event.description
            );
            self.state.record(event);
        }

        if minute == HALF_TIME_MINUTE {
            self.record_half_time();
        }
    }

    fn finish(&mut self) {
        self.record_half_time();

        let end = self.clock.end_minute();
        self.state.set_minute(end);
        self.state.record(MatchEvent::full_time(end));
        self.state.complete();

        log::info!(
            "[{}] full time: {} ({} events)",
            self.id,
            self.state.scoreline(),
            self.state.events().len()
        );
    }

    fn record_half_time(&mut self) {
        if self.half_time_recorded {
            return;
        }
        self.half_time_recorded = true;
        log::debug!("[{}] half time: {}", self.id, self.state.scoreline());
        self.state.record(MatchEvent::half_time());
    }

    fn take_update(&mut self) -> TickUpdate {
        let log = self.state.log();
        let new_events = log.since(self.cursor).to_vec();
        self.cursor = log.len();

        TickUpdate {
            minute: self.state.current_minute(),
            home_score: self.state.home_score(),
            away_score: self.state.away_score(),
            new_events,
            status: self.state.status(),
        }
    }
}
