//! Threshold band with a dead zone on either side.
//!
//! Operates on offset-corrected filtered values.

use crate::Sample;

/// Binary activation state of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorState {
    #[default]
    Inactive,
    Active,
}

/// Separate rising/falling edges around a threshold to prevent chatter.
///
/// Rising edge sits at `threshold + padding`, falling edge just below
/// `threshold - padding`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisBand {
    pub threshold: Sample,
    pub padding: Sample,
}

impl HysteresisBand {
    pub const fn new(threshold: Sample, padding: Sample) -> Self {
        Self { threshold, padding }
    }

    pub fn rising_edge(&self) -> Sample {
        self.threshold.wrapping_add(self.padding)
    }

    pub fn falling_edge(&self) -> Sample {
        self.threshold.wrapping_sub(self.padding)
    }

    /// State after observing `value` while in `state`
    pub fn next_state(&self, state: SensorState, value: Sample) -> SensorState {
        match state {
            SensorState::Inactive if value >= self.rising_edge() => SensorState::Active,
            SensorState::Active if value < self.falling_edge() => SensorState::Inactive,
            unchanged => unchanged,
        }
    }
}
