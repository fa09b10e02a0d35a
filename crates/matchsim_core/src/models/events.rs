use serde::{Deserialize, Serialize};

/// Minute of the half-time whistle.
pub const HALF_TIME_MINUTE: u8 = 45;
/// Length of regulation time in minutes.
pub const REGULATION_MINUTES: u8 = 90;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn is_home(self) -> bool {
        self == Side::Home
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    Substitution,
    Injury,
    /// Half-time whistle
    HalfTime,
    /// Full-time whistle
    FullTime,
}

impl EventKind {
    /// Kinds the event generator may draw. Whistles are emitted by the runner.
    pub const DRAWABLE: [EventKind; 5] = [
        EventKind::Goal,
        EventKind::YellowCard,
        EventKind::RedCard,
        EventKind::Substitution,
        EventKind::Injury,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Goal => "Goal",
            EventKind::YellowCard => "Yellow card",
            EventKind::RedCard => "Red card",
            EventKind::Substitution => "Substitution",
            EventKind::Injury => "Injury",
            EventKind::HalfTime => "Half time",
            EventKind::FullTime => "Full time",
        }
    }

    pub fn is_whistle(self) -> bool {
        matches!(self, EventKind::HalfTime | EventKind::FullTime)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEvent {
    pub minute: u8,
    pub kind: EventKind,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub description: String,
}

impl MatchEvent {
    pub fn goal(minute: u8, side: Side, actor: Option<String>) -> Self {
        let description = match &actor {
            Some(name) => format!("Goal! {} scores!", name),
            None => "Goal!".to_string(),
        };
        Self { minute, kind: EventKind::Goal, side, actor, description }
    }

    /// Non-goal incident (card, substitution, injury). Description is the kind label.
    pub fn incident(minute: u8, kind: EventKind, side: Side, actor: Option<String>) -> Self {
        debug_assert!(kind != EventKind::Goal && !kind.is_whistle());
        Self { minute, kind, side, actor, description: kind.label().to_string() }
    }

    pub fn half_time() -> Self {
        Self::whistle(HALF_TIME_MINUTE, EventKind::HalfTime)
    }

    pub fn full_time(minute: u8) -> Self {
        Self::whistle(minute, EventKind::FullTime)
    }

    fn whistle(minute: u8, kind: EventKind) -> Self {
        Self {
            minute,
            kind,
            side: Side::Home,
            actor: None,
            description: kind.label().to_string(),
        }
    }

    pub fn is_goal_for(&self, side: Side) -> bool {
        self.kind == EventKind::Goal && self.side == side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_description_names_actor() {
        let event = MatchEvent::goal(12, Side::Home, Some("Haaland".to_string()));
        assert_eq!(event.description, "Goal! Haaland scores!");
        assert_eq!(event.actor.as_deref(), Some("Haaland"));
        assert!(event.is_goal_for(Side::Home));
        assert!(!event.is_goal_for(Side::Away));
    }

    #[test]
    fn test_goal_without_roster() {
        let event = MatchEvent::goal(3, Side::Away, None);
        assert_eq!(event.description, "Goal!");
    }

    #[test]
    fn test_incident_uses_label() {
        let event = MatchEvent::incident(28, EventKind::YellowCard, Side::Away, None);
        assert_eq!(event.description, "Yellow card");
        assert!(event.actor.is_none());
    }

    #[test]
    fn test_whistles() {
        let ht = MatchEvent::half_time();
        assert_eq!(ht.minute, HALF_TIME_MINUTE);
        assert_eq!(ht.description, "Half time");

        let ft = MatchEvent::full_time(REGULATION_MINUTES);
        assert_eq!(ft.minute, 90);
        assert_eq!(ft.kind, EventKind::FullTime);
        assert!(ft.kind.is_whistle());
    }

    #[test]
    fn test_serialization_shape() {
        let event = MatchEvent::goal(12, Side::Home, Some("Haaland".to_string()));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "goal");
        assert_eq!(json["side"], "home");
        assert_eq!(json["actor"], "Haaland");

        let card = MatchEvent::incident(30, EventKind::YellowCard, Side::Away, None);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["kind"], "yellow_card");
        assert!(json.get("actor").is_none());
    }
}
