//! Boundaries to the board: ADC, HID output, serial link and timer.
//!
//! [`Pad`](crate::Pad) is generic over each of these, so the concrete
//! backend (keyboard or joystick actuation, for instance) is fixed at
//! compile time and dispatched statically.

use num_traits::AsPrimitive;

use crate::{Channel, Sample, Timestamp};

/// Raw analog input
pub trait Sampler {
    /// Native ADC reading type, converted to [`Sample`] before filtering
    type Raw: AsPrimitive<Sample>;

    /// Read one channel. Must not block.
    fn read(&mut self, channel: Channel) -> Self::Raw;
}

/// Turns sensor transitions into host-visible button events
pub trait Actuator {
    fn press(&mut self, channel: Channel);
    fn release(&mut self, channel: Channel);
}

/// Non-blocking byte stream carrying the calibration protocol
pub trait Transport: core::fmt::Write {
    /// Bytes buffered and ready to read right now
    fn bytes_available(&self) -> usize;

    /// Next buffered byte, or `None` if nothing is waiting
    fn read_byte(&mut self) -> Option<u8>;
}

/// Free-running timer used for pacing the driver loop
pub trait Clock {
    fn now(&mut self) -> Timestamp;
    fn delay_us(&mut self, us: u32);
}
