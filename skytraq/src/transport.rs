use std::io;

#[cfg(feature = "serial")]
pub use self::serial::{SerialConfig, SerialTransport, DEFAULT_BAUD_RATE};

/// Full-duplex byte stream connected to the receiver.
///
/// Writes block until every byte is handed over, reads never block.
pub trait Transport {
    /// Opens the underlying link. Must be called once before any other method.
    fn begin(&mut self) -> io::Result<()>;

    /// Writes all of `bytes` or fails
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Number of bytes that can be read right away
    fn available(&mut self) -> io::Result<usize>;

    /// Next received byte, `None` if nothing is pending
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self) -> io::Result<()> {
        (**self).begin()
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn available(&mut self) -> io::Result<usize> {
        (**self).available()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn begin(&mut self) -> io::Result<()> {
        (**self).begin()
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn available(&mut self) -> io::Result<usize> {
        (**self).available()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

#[cfg(feature = "serial")]
mod serial {
    use std::{
        io::{self, Read, Write},
        time::Duration,
    };

    use tracing::debug;

    use super::Transport;

    pub const DEFAULT_BAUD_RATE: u32 = 9600;

    /// Settings of the serial link.
    ///
    /// On a host the device path selects the UART, pin assignment is left to
    /// the operating system.
    #[derive(Debug, Clone, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SerialConfig {
        pub path: String,
        pub baud_rate: u32,
        /// Read/write timeout of the port itself
        pub timeout: Duration,
    }

    impl SerialConfig {
        pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
            Self {
                path: path.into(),
                baud_rate,
                timeout: Duration::from_millis(10),
            }
        }
    }

    impl Default for SerialConfig {
        fn default() -> Self {
            Self::new("/dev/ttyUSB0", DEFAULT_BAUD_RATE)
        }
    }

    /// [`Transport`] over a serial port, 8 data bits, no parity, one stop bit
    pub struct SerialTransport {
        config: SerialConfig,
        port: Option<Box<dyn serialport::SerialPort>>,
    }

    impl SerialTransport {
        /// The port is not opened until [`Transport::begin`]
        pub fn new(config: SerialConfig) -> Self {
            Self { config, port: None }
        }

        pub fn config(&self) -> &SerialConfig {
            &self.config
        }

        fn port(&mut self) -> io::Result<&mut Box<dyn serialport::SerialPort>> {
            self.port.as_mut().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotConnected, "serial port not opened")
            })
        }
    }

    impl Transport for SerialTransport {
        fn begin(&mut self) -> io::Result<()> {
            if self.port.is_some() {
                return Ok(());
            }
            debug!(
                "Opening {} at {} baud",
                self.config.path, self.config.baud_rate
            );
            let port = serialport::new(&self.config.path, self.config.baud_rate)
                .data_bits(serialport::DataBits::Eight)
                .parity(serialport::Parity::None)
                .stop_bits(serialport::StopBits::One)
                .flow_control(serialport::FlowControl::None)
                .timeout(self.config.timeout)
                .open()?;
            self.port = Some(port);
            Ok(())
        }

        fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
            let port = self.port()?;
            Write::write_all(port, bytes)?;
            Write::flush(port)
        }

        fn available(&mut self) -> io::Result<usize> {
            Ok(self.port()?.bytes_to_read()? as usize)
        }

        /// Converts port timeouts into "no data received"
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            let mut local_buf = [0; 1];
            match Read::read(self.port()?, &mut local_buf) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(local_buf[0])),
                Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
                Err(e) => Err(e),
            }
        }
    }
}
