use num_traits::AsPrimitive;

use crate::config::{Config, ConfigError};
use crate::hal::{Actuator, Clock, Sampler, Transport};
use crate::pacing::TickPacer;
use crate::protocol::CommandProtocol;
use crate::registry::SensorRegistry;
use crate::sensor::SensorEvent;
use crate::{Channel, Sample, Timestamp};

/// Fixed-rate driver tying sensors, protocol and collaborators together
pub struct Pad<S, A, const N: usize> {
    registry: SensorRegistry<N>,
    protocol: CommandProtocol,
    sampler: S,
    actuator: A,
    pacer: TickPacer,
}

impl<S, A, const N: usize> Pad<S, A, N>
where
    S: Sampler,
    A: Actuator,
{
    pub fn new(
        channels: [Channel; N],
        sampler: S,
        actuator: A,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: SensorRegistry::new(channels, config),
            protocol: CommandProtocol::new(),
            sampler,
            actuator,
            pacer: TickPacer::new(config.tick_period_us, 0),
        })
    }

    /// Account for the measured cost of [`Clock::delay_us`] when pacing
    pub fn with_overhead(mut self, overhead_us: u32) -> Self {
        self.pacer.overhead_us = overhead_us;
        self
    }

    pub fn registry(&self) -> &SensorRegistry<N> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SensorRegistry<N> {
        &mut self.registry
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn pacer(&self) -> &TickPacer {
        &self.pacer
    }

    /// One loop iteration: drain commands, then sample and evaluate every
    /// sensor once in registry order.
    ///
    /// Returns the number of press/release events forwarded.
    pub fn tick<T: Transport>(&mut self, transport: &mut T, now: Timestamp) -> usize {
        self.protocol.poll(transport, &mut self.registry);

        let mut forwarded = 0;
        for sensor in self.registry.iter_mut() {
            let channel = sensor.channel();
            let raw: Sample = self.sampler.read(channel).as_();

            match sensor.evaluate(raw, now) {
                Some(SensorEvent::Activated) => {
                    log::debug!(
                        "channel {} pressed at {} (value {})",
                        channel,
                        now,
                        sensor.current_value()
                    );
                    self.actuator.press(channel);
                    forwarded += 1;
                }
                Some(SensorEvent::Deactivated) => {
                    log::debug!("channel {} released at {}", channel, now);
                    self.actuator.release(channel);
                    forwarded += 1;
                }
                None => {}
            }
        }

        forwarded
    }

    /// Run the loop forever at the configured tick period
    pub fn run<T: Transport, C: Clock>(&mut self, transport: &mut T, clock: &mut C) -> ! {
        log::info!("driving {} sensors every {}us", N, self.pacer.period_us);

        loop {
            let started = clock.now();
            self.tick(transport, started);

            let now = clock.now();
            clock.delay_us(self.pacer.remaining(started, now));
        }
    }
}
