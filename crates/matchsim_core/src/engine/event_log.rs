use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SimulationError;
use crate::models::{EventKind, MatchEvent, Side};

/// Append-only, ordered event history.
///
/// Views borrow the log, so a renderer can re-read the full history at any
/// point without re-running the simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: MatchEvent) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.minute <= event.minute),
            "events must be appended in minute order"
        );
        self.events.push(event);
    }

    pub fn all(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchEvent> {
        self.events.iter()
    }

    /// Events appended after the first `cursor` entries.
    pub fn since(&self, cursor: usize) -> &[MatchEvent] {
        self.events.get(cursor..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&MatchEvent> {
        self.events.last()
    }

    pub fn count_kind(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn goals_for(&self, side: Side) -> usize {
        self.events.iter().filter(|e| e.is_goal_for(side)).count()
    }
}

impl TryFrom<Vec<MatchEvent>> for EventLog {
    type Error = SimulationError;

    fn try_from(events: Vec<MatchEvent>) -> Result<Self, Self::Error> {
        if let Some(pair) = events.windows(2).find(|pair| pair[0].minute > pair[1].minute) {
            return Err(SimulationError::InvalidSnapshot(format!(
                "event at minute {} logged after minute {}",
                pair[1].minute, pair[0].minute
            )));
        }
        Ok(Self { events })
    }
}

impl<'de> Deserialize<'de> for EventLog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let events = Vec::<MatchEvent>::deserialize(deserializer)?;
        EventLog::try_from(events).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a MatchEvent;
    type IntoIter = std::slice::Iter<'a, MatchEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
