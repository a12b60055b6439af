use crate::Timestamp;

/// Splits a fixed tick period into work and wait
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPacer {
    pub period_us: u32,
    /// Measured cost of the wait primitive itself
    pub overhead_us: u32,
}

impl TickPacer {
    pub const fn new(period_us: u32, overhead_us: u32) -> Self {
        Self {
            period_us,
            overhead_us,
        }
    }

    /// Time left to wait after a tick that began at `started`. Never negative.
    pub fn remaining(&self, started: Timestamp, now: Timestamp) -> u32 {
        let elapsed = now.wrapping_sub(started);
        self.period_us
            .saturating_sub(elapsed)
            .saturating_sub(self.overhead_us)
    }
}
