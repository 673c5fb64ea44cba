#![allow(dead_code)]

use std::{collections::VecDeque, io, time::Duration};

use skytraq::{DriverConfig, Skytraq, Transport};

pub const ACK_FRAME: [u8; 9] = [0xa0, 0xa1, 0x00, 0x02, 0x83, 0x00, 0x81, 0x0d, 0x0a];
pub const NACK_FRAME: [u8; 9] = [0xa0, 0xa1, 0x00, 0x02, 0x84, 0x00, 0x81, 0x0d, 0x0a];

/// In-memory transport. Each write pops the next scripted answer into the
/// receive queue, as if the module replied to the command.
#[derive(Default)]
pub struct ScriptedTransport {
    pub begun: bool,
    pub require_begin: bool,
    pub writes: Vec<Vec<u8>>,
    pub answers: VecDeque<Vec<u8>>,
    pub rx: VecDeque<u8>,
}

impl ScriptedTransport {
    pub fn answering(answers: &[&[u8]]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_vec()).collect(),
            ..Self::default()
        }
    }
}

impl Transport for ScriptedTransport {
    fn begin(&mut self) -> io::Result<()> {
        self.begun = true;
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.require_begin && !self.begun {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "not opened"));
        }
        self.writes.push(bytes.to_vec());
        if let Some(answer) = self.answers.pop_front() {
            self.rx.extend(answer);
        }
        Ok(())
    }

    fn available(&mut self) -> io::Result<usize> {
        Ok(self.rx.len())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.rx.pop_front())
    }
}

pub fn fast_config() -> DriverConfig {
    DriverConfig::default()
        .with_settle_delay(Duration::ZERO)
        .with_ack_timeout(Duration::from_millis(200))
}

pub fn device(answers: &[&[u8]]) -> Skytraq<ScriptedTransport> {
    Skytraq::new(ScriptedTransport::answering(answers), fast_config())
}
