use crate::config::Config;
use crate::sensor::Sensor;
use crate::{Channel, Sample};

/// Fixed, ordered set of sensors addressed by index `0..N`
#[derive(Debug, Clone)]
pub struct SensorRegistry<const N: usize> {
    sensors: [Sensor; N],
}

impl<const N: usize> SensorRegistry<N> {
    /// One sensor per channel, in the given order
    pub fn new(channels: [Channel; N], config: &Config) -> Self {
        Self {
            sensors: channels.map(|channel| Sensor::new(channel, config)),
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<&Sensor> {
        self.sensors.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sensor> {
        self.sensors.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Sensor> {
        self.sensors.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Sensor> {
        self.sensors.iter_mut()
    }

    /// Recalibrate every sensor in registry order
    pub fn recalibrate_all(&mut self) {
        for sensor in self.sensors.iter_mut() {
            let offset = sensor.recalibrate();
            log::info!("channel {} recalibrated, offset {}", sensor.channel(), offset);
        }
    }

    /// Set one sensor's threshold. Out-of-range indices change nothing.
    pub fn set_threshold(&mut self, index: usize, threshold: Sample) -> bool {
        match self.sensors.get_mut(index) {
            Some(sensor) => {
                sensor.set_threshold(threshold);
                log::info!("channel {} threshold set to {}", sensor.channel(), threshold);
                true
            }
            None => false,
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a SensorRegistry<N> {
    type Item = &'a Sensor;
    type IntoIter = core::slice::Iter<'a, Sensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
