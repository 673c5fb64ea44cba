//! # skytraq
//!
//! A pure-rust library to configure SkyTraq GNSS receivers (Venus, Phoenix, PX1xx families) using the SkyTraq binary protocol.
//!
//! An example of using this library to talk to a device can be seen in the skytraq_cli subfolder of this project.
//!
//! Sending Commands
//! ================
//!
//! Every configuration message is a value object implementing [`Command`]. Its fields are checked against
//! their documented ranges before anything is written to the receiver:
//! ```no_run
//! # #[cfg(feature = "serial")] {
//! use skytraq::{Attribute, DriverConfig, SbasConfig, SerialConfig, SerialTransport, Skytraq};
//!
//! let transport = SerialTransport::new(SerialConfig::new("/dev/ttyUSB0", 115200));
//! let mut gnss = Skytraq::new(transport, DriverConfig::default());
//! gnss.begin().expect("Could not open serial port");
//!
//! let sbas = SbasConfig {
//!     ranging_ura: 15,
//!     attribute: Attribute::SramAndFlash,
//!     ..SbasConfig::default()
//! };
//! match gnss.send(&sbas) {
//!     Ok(()) => println!("SBAS configured"),
//!     Err(e) => eprintln!("SBAS not configured: {e}"),
//! }
//! # }
//! ```
//!
//! Framing
//! =======
//!
//! [`PacketCodec`] frames raw payloads into its own transmit buffer, and [`decode_frame`] reverses it:
//! ```
//! use skytraq::{decode_frame, PacketCodec};
//!
//! let mut codec = PacketCodec::default();
//! let frame = codec.encode(&[0x04, 0x01]).unwrap();
//! assert_eq!(frame, &[0xa0, 0xa1, 0x00, 0x02, 0x04, 0x01, 0x05, 0x0d, 0x0a]);
//! assert_eq!(decode_frame(frame), Ok(&[0x04, 0x01][..]));
//! ```
//!
//! Acknowledgments
//! ===============
//!
//! The receiver answers each command with an ACK (`0x83`) or NACK (`0x84`) frame. [`AckParser`] recognizes it
//! byte by byte, [`AckReceiver`] drives it from a [`Transport`] up to a deadline.

pub use crate::{
    ack::{AckFrame, AckParser, AckReceiver, DEFAULT_ACK_TIMEOUT, DEFAULT_POLL_INTERVAL},
    codec::{decode_frame, xor_checksum, PacketCodec, TxBuffer},
    commands::*,
    config::{DriverConfig, DEFAULT_SETTLE_DELAY},
    constants::{
        ACK_ID, END_CHAR_1, END_CHAR_2, FRAME_OVERHEAD, MAX_COMMAND_PAYLOAD_LEN, MAX_FRAME_LEN,
        NACK_ID, SYNC_CHAR_1, SYNC_CHAR_2,
    },
    device::Skytraq,
    error::{EncodeError, Error, ParserError, Result, ValidationError},
    transport::Transport,
};

#[cfg(feature = "serial")]
pub use crate::transport::{SerialConfig, SerialTransport, DEFAULT_BAUD_RATE};

mod ack;
mod codec;
mod commands;
mod config;
mod constants;
mod device;
mod error;
mod transport;
