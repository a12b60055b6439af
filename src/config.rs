use crate::Sample;
use crate::filters::MAX_WINDOW;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    WindowTooSmall,
    WindowTooLarge,
    NegativePadding,
    ZeroTickPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WindowTooSmall => write!(f, "filter window must be at least 2"),
            ConfigError::WindowTooLarge => {
                write!(f, "filter window must not exceed {}", MAX_WINDOW)
            }
            ConfigError::NegativePadding => write!(f, "hysteresis padding must not be negative"),
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
        }
    }
}

/// Build-time tuning shared by every sensor on the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Threshold each sensor starts with, in filtered ADC counts (conventionally 0..1023)
    pub default_threshold: Sample,

    /// Hull filter window `n`
    pub window: usize,

    /// Half-width of the dead band around the threshold
    pub padding: Sample,

    /// Nominal driver loop period
    pub tick_period_us: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_threshold: 200,
            window: 10,
            padding: 1,
            tick_period_us: 1000,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The fast half-window filter needs at least one slot
        if self.window < 2 {
            return Err(ConfigError::WindowTooSmall);
        }

        if self.window > MAX_WINDOW {
            return Err(ConfigError::WindowTooLarge);
        }

        if self.padding < 0 {
            return Err(ConfigError::NegativePadding);
        }

        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        Ok(())
    }
}
