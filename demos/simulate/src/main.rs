//! Drives fsr-pad on the host with synthetic FSR readings
//!
//! Four noisy channels, one foot stepping across them, and a scripted
//! calibration session on the fake serial link. Run with
//! `RUST_LOG=debug` to see every press and release.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use fsr_pad::{Actuator, Channel, Clock, Config, Pad, Sampler, Transport};
use rand::Rng;

const SENSORS: usize = 4;
const TICKS: u32 = 4000;

/// Resting load plus a 400-count stomp on each panel in turn
struct StompSampler {
    tick: u32,
    rng: rand::rngs::ThreadRng,
}

impl Sampler for StompSampler {
    type Raw = u16;

    fn read(&mut self, channel: Channel) -> u16 {
        if channel == 0 {
            self.tick += 1;
        }
        let active = (self.tick / 500) % SENSORS as u32 == channel as u32;
        let base = 60 + 10 * channel as i32;
        let load = if active && self.tick % 500 < 250 { 400 } else { 0 };
        let noise = self.rng.gen_range(-6..=6);
        (base + load + noise).clamp(0, 1023) as u16
    }
}

struct PrintActuator;

impl Actuator for PrintActuator {
    fn press(&mut self, channel: Channel) {
        println!("  press   {}", channel);
    }

    fn release(&mut self, channel: Channel) {
        println!("  release {}", channel);
    }
}

/// Serial stand-in that releases one scripted line every few hundred ticks
struct ScriptedSerial {
    script: VecDeque<&'static [u8]>,
    pending: VecDeque<u8>,
    calls: u32,
}

impl ScriptedSerial {
    fn new(lines: &[&'static [u8]]) -> Self {
        Self {
            script: lines.iter().copied().collect(),
            pending: VecDeque::new(),
            calls: 0,
        }
    }

    fn advance(&mut self) {
        self.calls += 1;
        if self.calls % 300 == 0 {
            if let Some(line) = self.script.pop_front() {
                print!("> {}", String::from_utf8_lossy(line));
                self.pending.extend(line.iter().copied());
            }
        }
    }
}

impl core::fmt::Write for ScriptedSerial {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        print!("< {}", s);
        Ok(())
    }
}

impl Transport for ScriptedSerial {
    fn bytes_available(&self) -> usize {
        self.pending.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

struct HostClock {
    epoch: Instant,
}

impl Clock for HostClock {
    fn now(&mut self) -> u32 {
        self.epoch.elapsed().as_micros() as u32
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }
}

fn main() {
    env_logger::init();

    let config = Config::default();
    let sampler = StompSampler {
        tick: 0,
        rng: rand::thread_rng(),
    };
    let mut pad: Pad<_, _, SENSORS> =
        Pad::new([0, 1, 2, 3], sampler, PrintActuator, &config).expect("Valid config");

    let mut serial = ScriptedSerial::new(&[b"o\n", b"t\n", b"3150\n", b"v\n", b"9999\n", b"T\n"]);
    let mut clock = HostClock {
        epoch: Instant::now(),
    };

    println!("=== fsr-pad simulation: {} ticks ===", TICKS);

    let mut events = 0;
    for _ in 0..TICKS {
        serial.advance();

        let started = clock.now();
        events += pad.tick(&mut serial, started);
        let now = clock.now();
        clock.delay_us(pad.pacer().remaining(started, now));
    }

    println!("=== {} events forwarded ===", events);
}
