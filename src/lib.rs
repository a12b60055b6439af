#![no_std]

mod config;
mod pad;
mod pacing;
mod registry;
mod sensor;
pub mod filters;
pub mod hal;
pub mod hysteresis;
pub mod protocol;

pub use config::{Config, ConfigError};
pub use pad::Pad;
pub use pacing::TickPacer;
pub use registry::SensorRegistry;
pub use sensor::{Sensor, SensorEvent};
pub use filters::{HullFilter, WeightedMovingAvg, MAX_WINDOW};
pub use hal::{Actuator, Clock, Sampler, Transport};
pub use hysteresis::{HysteresisBand, SensorState};
pub use protocol::{Command, CommandError, CommandProtocol};

/// Raw readings and filtered outputs share the signed 16-bit domain.
pub type Sample = i16;

/// Physical channel a sensor is wired to.
pub type Channel = u8;

/// Free-running microsecond counter. Wraps.
pub type Timestamp = u32;
