//! Randomness seam for the event generator.
//!
//! Every `rand::Rng` is a `Dice`, so production runs use a seeded
//! `ChaCha8Rng`. `ScriptedDice` replays fixed outcomes for exact scenarios;
//! it is only built for tests or with the `testing` feature.

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;

use rand::Rng;

pub trait Dice {
    /// True with the given probability. Values at or below 0 never hit, at or above 1 always do.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Dice for R {
    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.gen_bool(probability)
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.gen_range(0..len)
    }
}

/// Replays queued outcomes in order.
///
/// Once a queue runs dry, `chance` answers false and `pick` answers 0, so a
/// script only needs to cover the ticks it cares about.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    chances: VecDeque<bool>,
    picks: VecDeque<usize>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

#[cfg(any(test, feature = "testing"))]
impl Dice for ScriptedDice {
    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |i| i.min(len.saturating_sub(1)))
    }
}
