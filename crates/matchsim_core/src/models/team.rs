use serde::{Deserialize, Serialize};

use crate::tactics::TacticsSheet;

/// One side of a fixture as handed to the engine.
///
/// The roster is only used to name goal scorers (and other actors when
/// configured). The engine does not validate names or interpret the tactics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamSheet {
    pub name: String,
    #[serde(default)]
    pub roster: Vec<String>,
    #[serde(default)]
    pub tactics: TacticsSheet,
}

impl TeamSheet {
    pub fn new(name: impl Into<String>, roster: Vec<String>) -> Self {
        Self { name: name.into(), roster, tactics: TacticsSheet::default() }
    }

    pub fn with_tactics(mut self, tactics: TacticsSheet) -> Self {
        self.tactics = tactics;
        self
    }

    /// Sheet with only a roster, named after the side.
    pub fn from_roster<I, S>(name: &str, roster: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, roster.into_iter().map(Into::into).collect())
    }

    pub fn player(&self, index: usize) -> Option<&str> {
        self.roster.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
}

impl Formation {
    pub const ALL: [Formation; 4] =
        [Formation::F442, Formation::F433, Formation::F352, Formation::F4231];

    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Returns (defenders, midfielders, forwards)
    pub fn get_positions(&self) -> (u8, u8, u8) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F352 => (3, 5, 2),
            Formation::F4231 => (4, 5, 1), // 2 DM + CAM + 2 wide = 5 midfielders
        }
    }
}
