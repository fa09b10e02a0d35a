use serde::Serialize;

use crate::models::{EventKind, MatchEvent, Side};

/// Running goal tally. Only goal events move it, one goal at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreAccumulator {
    home: u8,
    away: u8,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the event changed the score.
    pub fn apply(&mut self, event: &MatchEvent) -> bool {
        if event.kind != EventKind::Goal {
            return false;
        }
        match event.side {
            Side::Home => self.home = self.home.saturating_add(1),
            Side::Away => self.away = self.away.saturating_add(1),
        }
        true
    }

    pub fn home(&self) -> u8 {
        self.home
    }

    pub fn away(&self) -> u8 {
        self.away
    }

    /// (home, away)
    pub fn as_tuple(&self) -> (u8, u8) {
        (self.home, self.away)
    }
}
