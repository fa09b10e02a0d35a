use serde::{Deserialize, Serialize};

use super::{EventKind, MatchEvent, Side, TeamSheet};
use crate::engine::{EventLog, ScoreAccumulator};
use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    Running,
    Completed,
}

/// Everything a single simulated match accumulates.
///
/// Created fresh per run and owned by the runner that drives it. Score and
/// log only move forward: there is no way to remove an event or a goal.
/// Deserializing rebuilds the score from the logged goals and rejects
/// snapshots whose score, whistles or status disagree with the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatchSnapshot")]
pub struct MatchState {
    pub home: TeamSheet,
    pub away: TeamSheet,
    current_minute: u8,
    score: ScoreAccumulator,
    events: EventLog,
    status: MatchStatus,
}

impl MatchState {
    pub fn new(home: TeamSheet, away: TeamSheet) -> Self {
        Self {
            home,
            away,
            current_minute: 0,
            score: ScoreAccumulator::new(),
            events: EventLog::new(),
            status: MatchStatus::NotStarted,
        }
    }

    /// NotStarted -> Running. A state can only be started once.
    pub fn start(&mut self) -> Result<()> {
        if self.status != MatchStatus::NotStarted {
            return Err(SimulationError::InvalidState { status: self.status });
        }
        self.current_minute = 0;
        self.score = ScoreAccumulator::new();
        self.events = EventLog::new();
        self.status = MatchStatus::Running;
        Ok(())
    }

    pub(crate) fn set_minute(&mut self, minute: u8) {
        debug_assert!(minute >= self.current_minute);
        self.current_minute = minute;
    }

    /// Apply an event to the score and append it to the log.
    pub(crate) fn record(&mut self, event: MatchEvent) {
        self.score.apply(&event);
        self.events.append(event);
    }

    pub(crate) fn complete(&mut self) {
        self.status = MatchStatus::Completed;
    }

    pub fn current_minute(&self) -> u8 {
        self.current_minute
    }

    pub fn home_score(&self) -> u8 {
        self.score.home()
    }

    pub fn away_score(&self) -> u8 {
        self.score.away()
    }

    pub fn score(&self) -> (u8, u8) {
        self.score.as_tuple()
    }

    pub fn events(&self) -> &[MatchEvent] {
        self.events.all()
    }

    pub fn log(&self) -> &EventLog {
        &self.events
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == MatchStatus::Running
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn team(&self, side: Side) -> &TeamSheet {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// "City 2 - 1 Spurs"
    pub fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home.name,
            self.score.home(),
            self.score.away(),
            self.away.name
        )
    }
}

/// Wire shape of a serialized [`MatchState`], checked before it is accepted.
#[derive(Deserialize)]
struct MatchSnapshot {
    home: TeamSheet,
    away: TeamSheet,
    current_minute: u8,
    score: ScoreSnapshot,
    events: EventLog,
    status: MatchStatus,
}

#[derive(Deserialize)]
struct ScoreSnapshot {
    home: u8,
    away: u8,
}

impl TryFrom<MatchSnapshot> for MatchState {
    type Error = SimulationError;

    fn try_from(snapshot: MatchSnapshot) -> Result<Self> {
        let MatchSnapshot { home, away, current_minute, score: claimed, events, status } = snapshot;

        let mut score = ScoreAccumulator::new();
        for event in &events {
            score.apply(event);
        }
        if score.as_tuple() != (claimed.home, claimed.away) {
            return Err(SimulationError::InvalidSnapshot(format!(
                "score {}-{} disagrees with {}-{} in the log",
                claimed.home,
                claimed.away,
                score.home(),
                score.away()
            )));
        }

        if events.count_kind(EventKind::HalfTime) > 1 {
            return Err(SimulationError::InvalidSnapshot("more than one half-time whistle".into()));
        }

        let full_time = events.count_kind(EventKind::FullTime);
        let ends_with_full_time = events.last().map(|e| e.kind) == Some(EventKind::FullTime);
        match status {
            MatchStatus::NotStarted if !events.is_empty() => {
                return Err(SimulationError::InvalidSnapshot(
                    "match not started but events are logged".into(),
                ));
            }
            MatchStatus::Running if full_time > 0 => {
                return Err(SimulationError::InvalidSnapshot(
                    "running match already has a full-time whistle".into(),
                ));
            }
            MatchStatus::Completed if full_time != 1 || !ends_with_full_time => {
                return Err(SimulationError::InvalidSnapshot(
                    "completed match must end with a single full-time whistle".into(),
                ));
            }
            _ => {}
        }

        Ok(Self { home, away, current_minute, score, events, status })
    }
}
