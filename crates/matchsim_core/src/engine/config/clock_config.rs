//! Clock Configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::REGULATION_MINUTES;

/// Longest stoppage the clock accepts.
pub const MAX_STOPPAGE_MINUTES: u8 = 30;

/// Simulated-time parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// First minute the clock reports (default: 1)
    pub start_minute: u8,
    /// Minutes advanced per tick (default: 2)
    pub step_minutes: u8,
    /// Minutes played after regulation before the final whistle (default: 0)
    pub stoppage_minutes: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { start_minute: 1, step_minutes: 2, stoppage_minutes: 0 }
    }
}

impl ClockConfig {
    /// Last minute a tick may land on; also the minute of the final whistle.
    pub fn end_minute(&self) -> u8 {
        REGULATION_MINUTES + self.stoppage_minutes
    }

    /// Number of ticks a full run takes.
    pub fn tick_count(&self) -> usize {
        if self.step_minutes == 0 || self.start_minute > self.end_minute() {
            return 0;
        }
        usize::from((self.end_minute() - self.start_minute) / self.step_minutes) + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_minutes == 0 {
            return Err(SimulationError::InvalidConfig("clock step must be at least 1".into()));
        }
        if self.stoppage_minutes > MAX_STOPPAGE_MINUTES {
            return Err(SimulationError::InvalidConfig(format!(
                "stoppage must be at most {} minutes, got {}",
                MAX_STOPPAGE_MINUTES, self.stoppage_minutes
            )));
        }
        if self.start_minute > REGULATION_MINUTES {
            return Err(SimulationError::InvalidConfig(format!(
                "clock must start within regulation time, got minute {}",
                self.start_minute
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_tick_count() {
        // 1, 3, ..., 89
        assert_eq!(ClockConfig::default().tick_count(), 45);
    }

    #[test]
    fn test_tick_count_with_stoppage() {
        let cfg = ClockConfig { start_minute: 2, step_minutes: 2, stoppage_minutes: 4 };
        // 2, 4, ..., 94
        assert_eq!(cfg.tick_count(), 47);
        assert_eq!(cfg.end_minute(), 94);
    }

    #[test]
    fn test_validation() {
        assert!(ClockConfig::default().validate().is_ok());
        assert!(ClockConfig { step_minutes: 0, ..Default::default() }.validate().is_err());
        assert!(ClockConfig { stoppage_minutes: 31, ..Default::default() }.validate().is_err());
        assert!(ClockConfig { start_minute: 91, ..Default::default() }.validate().is_err());
    }
}
