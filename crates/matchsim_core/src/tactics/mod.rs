//! Tactical settings chosen before a match.
//!
//! These are carried on the match state so a front end can show them next to
//! the live score. The event generator never reads them.

use serde::{Deserialize, Serialize};

use crate::models::Formation;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayingStyle {
    Balanced,
    Attacking,
    #[default]
    Defensive,
    Possession,
    Counter,
}

impl PlayingStyle {
    pub fn name(&self) -> &'static str {
        match self {
            PlayingStyle::Balanced => "Balanced",
            PlayingStyle::Attacking => "Attacking",
            PlayingStyle::Defensive => "Defensive",
            PlayingStyle::Possession => "Possession",
            PlayingStyle::Counter => "Counter-Attack",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mentality {
    Defensive,
    Cautious,
    #[default]
    Balanced,
    Positive,
    Attacking,
}

impl Mentality {
    /// Risk label shown next to the mentality picker.
    pub fn risk(&self) -> &'static str {
        match self {
            Mentality::Defensive => "Low",
            Mentality::Cautious => "Low-Medium",
            Mentality::Balanced => "Medium",
            Mentality::Positive => "Medium-High",
            Mentality::Attacking => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PressIntensity {
    Low,
    #[default]
    Medium,
    High,
    Gegenpress,
}

impl PressIntensity {
    pub fn name(&self) -> &'static str {
        match self {
            PressIntensity::Low => "Low Press",
            PressIntensity::Medium => "Medium Press",
            PressIntensity::High => "High Press",
            PressIntensity::Gegenpress => "Gegenpress",
        }
    }
}

/// Full tactical sheet for one side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TacticsSheet {
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub playing_style: PlayingStyle,
    #[serde(default)]
    pub mentality: Mentality,
    #[serde(default)]
    pub press_intensity: PressIntensity,
}

impl TacticsSheet {
    pub fn summary(&self) -> String {
        format!(
            "{} / {} / {} mentality / {}",
            self.formation.code(),
            self.playing_style.name(),
            self.mentality.risk(),
            self.press_intensity.name()
        )
    }
}
