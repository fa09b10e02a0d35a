//! Real-time pacing between ticks.
//!
//! The runner calls `pause` once per tick, before the tick's state change, so
//! an observer sees one update per interval. Tests and batch runs use
//! `Pacing::Immediate`.

use std::time::Duration;

pub trait TickPacer {
    fn pause(&mut self, minute: u8);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// No delay between ticks.
    #[default]
    Immediate,
    /// Sleep the calling thread for the interval before each tick.
    RealTime(Duration),
}

impl Pacing {
    pub fn real_time_ms(interval_ms: u64) -> Self {
        if interval_ms == 0 {
            Pacing::Immediate
        } else {
            Pacing::RealTime(Duration::from_millis(interval_ms))
        }
    }

}

impl TickPacer for Pacing {
    fn pause(&mut self, _minute: u8) {
        if let Pacing::RealTime(interval) = self {
            std::thread::sleep(*interval);
        }
    }
}

impl<P: TickPacer + ?Sized> TickPacer for Box<P> {
    fn pause(&mut self, minute: u8) {
        (**self).pause(minute)
    }
}
