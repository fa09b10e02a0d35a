use super::config::ClockConfig;
use crate::error::{Result, SimulationError};

/// Outcome of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Simulated minute reached by this tick.
    Minute(u8),
    /// The next step would pass the final minute. Reported exactly once.
    Finished,
}

/// Simulated match clock: `start, start + step, ...` up to and including `end`.
#[derive(Debug, Clone)]
pub struct Clock {
    start: u8,
    step: u8,
    end: u8,
    last: Option<u8>,
    finished: bool,
}

impl Clock {
    pub fn new(config: &ClockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            start: config.start_minute,
            step: config.step_minutes,
            end: config.end_minute(),
            last: None,
            finished: false,
        })
    }

    pub fn advance(&mut self) -> Result<Tick> {
        if self.finished {
            return Err(SimulationError::InvalidTick { minute: self.current_minute() });
        }

        let next = match self.last {
            None => Some(self.start),
            Some(minute) => minute.checked_add(self.step),
        };

        match next {
            Some(minute) if minute <= self.end => {
                self.last = Some(minute);
                Ok(Tick::Minute(minute))
            }
            _ => {
                self.finished = true;
                Ok(Tick::Finished)
            }
        }
    }

    /// Last minute reported, 0 before the first tick.
    pub fn current_minute(&self) -> u8 {
        self.last.unwrap_or(0)
    }

    pub fn end_minute(&self) -> u8 {
        self.end
    }
}
