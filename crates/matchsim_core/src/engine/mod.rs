pub mod clock;
pub mod config;
pub mod dice;
pub mod event_log;
pub mod events;
pub mod pacing;
pub mod runner;
pub mod score;

pub use clock::{Clock, Tick};
pub use config::{ClockConfig, GeneratorConfig, SimulationConfig};
pub use dice::Dice;
#[cfg(any(test, feature = "testing"))]
pub use dice::ScriptedDice;
pub use event_log::EventLog;
pub use events::EventGenerator;
pub use pacing::{Pacing, TickPacer};
pub use runner::{SimulationHandle, SimulationRunner, TickUpdate};
pub use score::ScoreAccumulator;
