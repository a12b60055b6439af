use heapless::Vec;

use crate::Sample;

use super::MAX_WINDOW;

/// Linearly weighted moving average with O(1) update
///
/// The newest sample carries weight `capacity`, the oldest weight `1`.
/// RAM cost: MAX_WINDOW * 2 bytes regardless of capacity.
#[derive(Debug, Clone)]
pub struct WeightedMovingAvg {
    window: Vec<Sample, MAX_WINDOW>,
    capacity: usize,
    cursor: usize,
    sum: i32,
    weighted_sum: i32,
}

impl WeightedMovingAvg {
    /// Create a filter over the last `capacity` samples
    ///
    /// capacity is clamped into 1..=MAX_WINDOW
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_WINDOW);

        let mut window = Vec::new();
        // Pre-fill so the window starts as `capacity` zero samples
        for _ in 0..capacity {
            let _ = window.push(0);
        }

        Self {
            window,
            capacity,
            cursor: 0,
            sum: 0,
            weighted_sum: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push one sample and return the weighted average of the window
    ///
    /// Every existing entry loses one unit of weight (the oldest drops out),
    /// the new sample enters at full weight. Arithmetic wraps.
    pub fn observe(&mut self, value: Sample) -> Sample {
        let n = self.capacity as i32;
        let value = value as i32;
        let oldest = self.window[self.cursor] as i32;

        let next_sum = self.sum.wrapping_sub(oldest).wrapping_add(value);
        let next_weighted_sum = self
            .weighted_sum
            .wrapping_add(n.wrapping_mul(value))
            .wrapping_sub(self.sum);

        self.window[self.cursor] = value as Sample;
        self.cursor = (self.cursor + 1) % self.capacity;
        self.sum = next_sum;
        self.weighted_sum = next_weighted_sum;

        (next_weighted_sum / (n * (n + 1) / 2)) as Sample
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.sum = 0;
        self.weighted_sum = 0;
        for slot in self.window.iter_mut() {
            *slot = 0;
        }
    }

    #[cfg(test)]
    fn recomputed(&self) -> (i32, i32) {
        // Walk from oldest (weight 1) to newest (weight capacity)
        let mut sum = 0;
        let mut weighted = 0;
        for age in 0..self.capacity {
            let v = self.window[(self.cursor + age) % self.capacity] as i32;
            sum += v;
            weighted += v * (age as i32 + 1);
        }
        (sum, weighted)
    }
}
