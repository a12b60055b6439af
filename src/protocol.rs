//! Line-oriented ASCII calibration protocol.
//!
//! Each line is dispatched on its first byte:
//!
//! | line     | effect                                              |
//! |----------|-----------------------------------------------------|
//! | `o`      | recalibrate every sensor, no reply                  |
//! | `v`      | reply `v <value> <value> ...`                       |
//! | `t`      | reply `t <threshold> <threshold> ...`               |
//! | `<i><n>` | set sensor `i` threshold to `n`, reply as for `t`   |
//!
//! Malformed lines are dropped without a reply.

use heapless::Vec;

use crate::hal::Transport;
use crate::registry::SensorRegistry;
use crate::Sample;

/// Default line buffer size, terminator slot included
pub const LINE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Recalibrate,
    ReportValues,
    ReportThresholds,
    SetThreshold { index: usize, threshold: Sample },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    /// Set-threshold line outside 2..=5 bytes
    Length(usize),
    /// Sensor index outside the registry
    Index(i16),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command line"),
            CommandError::Length(len) => {
                write!(f, "set-threshold line must be 2..=5 bytes, got {}", len)
            }
            CommandError::Index(index) => write!(f, "no sensor at index {}", index),
        }
    }
}

impl Command {
    /// Parse one line (terminator already removed) for a registry of `sensor_count` sensors
    pub fn parse(line: &[u8], sensor_count: usize) -> Result<Self, CommandError> {
        let Some(&first) = line.first() else {
            return Err(CommandError::Empty);
        };

        match first {
            b'o' | b'O' => Ok(Command::Recalibrate),
            b'v' | b'V' => Ok(Command::ReportValues),
            b't' | b'T' => Ok(Command::ReportThresholds),
            _ => {
                if !(2..=5).contains(&line.len()) {
                    return Err(CommandError::Length(line.len()));
                }

                // Any other leading byte is read as a single decimal digit
                let index = first as i16 - b'0' as i16;
                if index < 0 || index as usize >= sensor_count {
                    return Err(CommandError::Index(index));
                }

                Ok(Command::SetThreshold {
                    index: index as usize,
                    threshold: parse_decimal_prefix(&line[1..]),
                })
            }
        }
    }

    /// Apply the command and write its reply, if any
    pub fn execute<T: Transport, const N: usize>(
        self,
        registry: &mut SensorRegistry<N>,
        transport: &mut T,
    ) -> core::fmt::Result {
        match self {
            Command::Recalibrate => {
                registry.recalibrate_all();
                Ok(())
            }
            Command::ReportValues => {
                write_report(transport, 'v', registry.iter().map(|s| s.current_value()))
            }
            Command::ReportThresholds => write_report(
                transport,
                't',
                registry.iter().map(|s| s.current_threshold()),
            ),
            Command::SetThreshold { index, threshold } => {
                registry.set_threshold(index, threshold);
                write_report(
                    transport,
                    't',
                    registry.iter().map(|s| s.current_threshold()),
                )
            }
        }
    }
}

fn write_report<T, I>(transport: &mut T, tag: char, values: I) -> core::fmt::Result
where
    T: Transport,
    I: Iterator<Item = Sample>,
{
    transport.write_char(tag)?;
    for value in values {
        write!(transport, " {}", value)?;
    }
    transport.write_char('\n')
}

/// Leading decimal number of `bytes`, or 0 if there is none.
///
/// Leading ASCII whitespace is skipped; parsing stops at the first non-digit.
pub fn parse_decimal_prefix(bytes: &[u8]) -> Sample {
    bytes
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .take_while(|b| b.is_ascii_digit())
        .fold(0 as Sample, |acc, &digit| {
            acc.wrapping_mul(10).wrapping_add((digit - b'0') as Sample)
        })
}

/// Accumulates bytes until a full line is available.
///
/// A line ends at `\n`, or once `CAP - 1` bytes have been buffered.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const CAP: usize> {
    bytes: Vec<u8, CAP>,
}

impl<const CAP: usize> LineBuffer<CAP> {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append one byte. Returns true when a line is complete.
    pub fn push(&mut self, byte: u8) -> bool {
        if byte == b'\n' {
            return true;
        }

        let _ = self.bytes.push(byte);
        self.bytes.len() + 1 >= CAP
    }

    /// Buffered line, terminator excluded
    pub fn line(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

/// Drains a [`Transport`] and dispatches complete lines to the registry
#[derive(Debug, Clone, Default)]
pub struct CommandProtocol<const LINE: usize = LINE_CAPACITY> {
    line: LineBuffer<LINE>,
}

impl<const LINE: usize> CommandProtocol<LINE> {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Bytes of an unfinished line carried over to the next poll
    pub fn pending(&self) -> usize {
        self.line.len()
    }

    /// Process whatever input is buffered right now.
    ///
    /// Reads at most the byte count the transport reports on entry, so
    /// input arriving during the drain waits for the next poll. Returns the
    /// number of commands executed.
    pub fn poll<T: Transport, const N: usize>(
        &mut self,
        transport: &mut T,
        registry: &mut SensorRegistry<N>,
    ) -> usize {
        let budget = transport.bytes_available();
        let mut executed = 0;

        for _ in 0..budget {
            let Some(byte) = transport.read_byte() else {
                break;
            };
            if !self.line.push(byte) {
                continue;
            }

            let parsed = Command::parse(self.line.line(), N);
            self.line.clear();

            match parsed {
                Ok(command) => {
                    executed += 1;
                    if let Err(err) = command.execute(registry, transport) {
                        log::warn!("failed to write reply to {:?}: {}", command, err);
                    }
                }
                Err(err) => log::trace!("ignoring command line: {}", err),
            }
        }

        executed
    }
}
