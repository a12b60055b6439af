use crate::config::Config;
use crate::filters::HullFilter;
use crate::hysteresis::{HysteresisBand, SensorState};
use crate::{Channel, Sample, Timestamp};

/// Transition reported by [`Sensor::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    Activated,
    Deactivated,
}

/// One force sensor: filter chain, calibration offset and hysteresis state.
#[derive(Debug, Clone)]
pub struct Sensor {
    channel: Channel,
    band: HysteresisBand,
    offset: Sample,
    state: SensorState,
    smoothed: Sample,
    filter: HullFilter,
    last_activation: Option<Timestamp>,
}

impl Sensor {
    pub fn new(channel: Channel, config: &Config) -> Self {
        Self {
            channel,
            band: HysteresisBand::new(config.default_threshold, config.padding),
            offset: 0,
            state: SensorState::Inactive,
            smoothed: 0,
            filter: HullFilter::new(config.window),
            last_activation: None,
        }
    }

    /// Feed one raw reading through the filter and update the activation state.
    ///
    /// Returns an event only when the state changes.
    pub fn evaluate(&mut self, raw: Sample, now: Timestamp) -> Option<SensorEvent> {
        self.smoothed = self.filter.observe(raw);

        let next = self.band.next_state(self.state, self.current_value());
        if next == self.state {
            return None;
        }
        self.state = next;

        match next {
            SensorState::Active => {
                self.last_activation = Some(now);
                Some(SensorEvent::Activated)
            }
            SensorState::Inactive => Some(SensorEvent::Deactivated),
        }
    }

    /// Replace the threshold. Takes effect on the next evaluation.
    pub fn set_threshold(&mut self, threshold: Sample) {
        self.band.threshold = threshold;
    }

    /// Treat the current filtered reading as the new zero.
    ///
    /// Only meaningful while nothing is standing on the sensor.
    pub fn recalibrate(&mut self) -> Sample {
        self.offset = self.smoothed;
        self.offset
    }

    /// Filtered value minus the calibration offset
    pub fn current_value(&self) -> Sample {
        self.smoothed.wrapping_sub(self.offset)
    }

    pub fn current_threshold(&self) -> Sample {
        self.band.threshold
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn state(&self) -> SensorState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SensorState::Active
    }

    pub fn offset(&self) -> Sample {
        self.offset
    }

    pub fn padding(&self) -> Sample {
        self.band.padding
    }

    /// Time of the most recent `Activated` event
    pub fn last_activation(&self) -> Option<Timestamp> {
        self.last_activation
    }
}
