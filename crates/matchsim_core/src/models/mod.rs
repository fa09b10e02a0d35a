pub mod events;
pub mod state;
pub mod team;

pub use events::{EventKind, MatchEvent, Side, HALF_TIME_MINUTE, REGULATION_MINUTES};
pub use state::{MatchState, MatchStatus};
pub use team::{Formation, TeamSheet};
