// config.rs - Compile-time grid constants and tunable simulation parameters

use std::time::Duration;

use crate::error::LifeError;

pub const NUM_ROWS: usize = 70;
pub const NUM_COLS: usize = 70;

/// Pause between the end of one generation step and the start of the next.
pub const STEP_DELAY: Duration = Duration::from_millis(100);

/// Chance that a cell starts alive when the grid is randomized.
pub const LIVE_PROBABILITY: f64 = 0.4;

/// Runtime-tunable parameters. The grid size is fixed by `NUM_ROWS` and
/// `NUM_COLS` and is not part of this struct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    pub step_delay: Duration,
    pub live_probability: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            step_delay: STEP_DELAY,
            live_probability: LIVE_PROBABILITY,
        }
    }
}

impl LifeConfig {
    pub fn with_step_delay(mut self, step_delay: Duration) -> Result<Self, LifeError> {
        self.step_delay = step_delay;
        self.validate()?;
        Ok(self)
    }

    pub fn with_live_probability(mut self, live_probability: f64) -> Result<Self, LifeError> {
        self.live_probability = live_probability;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.step_delay.is_zero() {
            return Err(LifeError::InvalidStepDelay);
        }
        check_probability(self.live_probability)
    }
}

pub(crate) fn check_probability(p: f64) -> Result<(), LifeError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(LifeError::InvalidProbability(p))
    }
}
