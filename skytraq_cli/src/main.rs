use anyhow::{bail, Context, Result};
use clap::Parser;
use skytraq::{SerialTransport, Skytraq};
use tracing::{debug, info};

mod cli;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize()?;

    let request = cli
        .command
        .request(cli.attribute(), chrono::Utc::now().naive_utc())
        .context("Invalid command arguments")?;

    let serial = cli.serial_config();
    debug!("Connecting to {} at {} baud", serial.path, serial.baud_rate);
    let mut device = Skytraq::new(SerialTransport::new(serial), cli.driver_config());
    device
        .begin()
        .with_context(|| format!("Could not open serial port {}", cli.port))?;

    match device.try_issue(&request.payload) {
        Ok(()) => {
            info!("{} acknowledged", request.name);
            println!("{}: OK", request.name);
            Ok(())
        },
        Err(e) if e.is_fatal() => Err(e).context("Device not initialized"),
        Err(e) => bail!("{} failed: {}", request.name, e),
    }
}
