#![allow(dead_code)]

use std::collections::VecDeque;

use fsr_pad::{Actuator, Channel, Clock, Sampler, Timestamp, Transport};

/// Serial stand-in: scripted input, captured output
#[derive(Default)]
pub struct MockTransport {
    pub input: VecDeque<u8>,
    pub output: String,
    /// Caps what `bytes_available` reports, to model data still in flight
    pub visible: Option<usize>,
}

impl MockTransport {
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut transport = Self::default();
        transport.send(bytes);
        transport
    }

    pub fn send(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl core::fmt::Write for MockTransport {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

impl Transport for MockTransport {
    fn bytes_available(&self) -> usize {
        match self.visible {
            Some(limit) => limit.min(self.input.len()),
            None => self.input.len(),
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }
}

/// ADC stand-in returning a settable level per channel
pub struct MockSampler<const N: usize> {
    pub levels: [u16; N],
    pub reads: Vec<Channel>,
}

impl<const N: usize> MockSampler<N> {
    pub fn new() -> Self {
        Self {
            levels: [0; N],
            reads: Vec::new(),
        }
    }
}

impl<const N: usize> Sampler for MockSampler<N> {
    type Raw = u16;

    fn read(&mut self, channel: Channel) -> u16 {
        self.reads.push(channel);
        self.levels[channel as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press(Channel),
    Release(Channel),
}

#[derive(Default)]
pub struct RecordingActuator {
    pub actions: Vec<Action>,
}

impl Actuator for RecordingActuator {
    fn press(&mut self, channel: Channel) {
        self.actions.push(Action::Press(channel));
    }

    fn release(&mut self, channel: Channel) {
        self.actions.push(Action::Release(channel));
    }
}

/// Advances 100us per reading and stops the loop after `limit` waits
pub struct SteppingClock {
    pub time: Timestamp,
    pub delays: Vec<u32>,
    pub limit: usize,
}

impl SteppingClock {
    pub fn new(limit: usize) -> Self {
        Self {
            time: 0,
            delays: Vec::new(),
            limit,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&mut self) -> Timestamp {
        let now = self.time;
        self.time += 100;
        now
    }

    fn delay_us(&mut self, us: u32) {
        self.delays.push(us);
        if self.delays.len() >= self.limit {
            panic!("clock stopped after {} ticks", self.limit);
        }
        self.time += us;
    }
}
