use std::time::Duration;

use crate::{
    ack::{DEFAULT_ACK_TIMEOUT, DEFAULT_POLL_INTERVAL},
    constants::MAX_FRAME_LEN,
};

/// Time given to the module to process a command before reading its answer
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Tunables of [`Skytraq`](crate::Skytraq)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Deadline for the acknowledgment of a command
    pub ack_timeout: Duration,
    /// Pause between writing a frame and waiting for its acknowledgment
    pub settle_delay: Duration,
    /// Back-off when no byte is available
    pub poll_interval: Duration,
    /// Size of the transmit buffer, framing included
    pub tx_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ack_timeout: DEFAULT_ACK_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            tx_capacity: MAX_FRAME_LEN,
        }
    }
}

impl DriverConfig {
    pub fn with_ack_timeout(mut self, ack_timeout: Duration) -> Self {
        self.ack_timeout = ack_timeout;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Capacities below the largest command frame are raised to it
    pub fn with_tx_capacity(mut self, tx_capacity: usize) -> Self {
        self.tx_capacity = tx_capacity.max(MAX_FRAME_LEN);
        self
    }
}
