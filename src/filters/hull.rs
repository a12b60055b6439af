use crate::Sample;

use super::WeightedMovingAvg;

/// Hull moving average built from three weighted averages
///
/// `2 * wma(n/2) - wma(n)` cancels most of the lag of a plain weighted
/// average, and a final `wma(sqrt(n))` smooths the roughness that leaves.
#[derive(Debug, Clone)]
pub struct HullFilter {
    fast: WeightedMovingAvg,
    slow: WeightedMovingAvg,
    smooth: WeightedMovingAvg,
    window: usize,
}

impl HullFilter {
    /// Create a Hull filter for window `n`
    ///
    /// The final stage uses `sqrt(n)` truncated toward zero.
    pub fn new(window: usize) -> Self {
        let root = libm::sqrtf(window as f32) as usize;

        Self {
            fast: WeightedMovingAvg::new(window / 2),
            slow: WeightedMovingAvg::new(window),
            smooth: WeightedMovingAvg::new(root),
            window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn observe(&mut self, value: Sample) -> Sample {
        let fast = self.fast.observe(value) as i32;
        let slow = self.slow.observe(value) as i32;

        let detrended = fast.wrapping_mul(2).wrapping_sub(slow) as Sample;
        self.smooth.observe(detrended)
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.smooth.reset();
    }
}
