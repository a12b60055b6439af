/// Signal smoothing for raw FSR readings
///
/// Both filters work in integer sample space with wrapping arithmetic.
/// Windows live in fixed-capacity buffers, nothing is allocated per sample.
mod hull;
mod weighted;

pub use hull::HullFilter;
pub use weighted::WeightedMovingAvg;

/// Largest window a single weighted average will hold
pub const MAX_WINDOW: usize = 100;
