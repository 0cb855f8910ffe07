//! Recording transmitter for simulators and tests.
//!
//! Collects every command instead of keying an IR carrier, so scenario
//! tests can assert on exactly what would have been transmitted.

extern crate alloc;

use alloc::vec::Vec;

use crate::transmit::{Command, Transmitter};

/// In-memory transmitter that records sent commands in order.
#[derive(Debug, Default)]
pub struct RecordingTransmitter {
    sent: Vec<Command>,
}

impl RecordingTransmitter {
    /// Create a transmitter with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands sent so far, oldest first.
    pub fn sent(&self) -> &[Command] {
        &self.sent
    }

    /// Drain the log, returning the recorded commands.
    pub fn take(&mut self) -> Vec<Command> {
        core::mem::take(&mut self.sent)
    }

    /// How many times one command was sent.
    pub fn count(&self, command: Command) -> usize {
        self.sent.iter().filter(|sent| **sent == command).count()
    }
}

impl Transmitter for RecordingTransmitter {
    fn send(&mut self, command: Command) {
        self.sent.push(command);
    }
}
