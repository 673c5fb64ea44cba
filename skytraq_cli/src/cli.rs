use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skytraq::{
    Attribute, Constellation, DopMask, DopMode, DriverConfig, FactoryDefault,
    NmeaTalkerId, PinningMode, PinningParams, PositionPinning, PositionRate, PowerMode,
    PowerSaving, QzssConfig, RestartMode, SbasConfig, SbasSubsystem, SerialConfig,
    SetConstellation, SystemRestart, TalkerId, DEFAULT_BAUD_RATE,
};

#[derive(Debug, Parser)]
#[command(version, about = "Configure SkyTraq GNSS receivers over a serial port")]
pub struct Cli {
    /// Serial port to open to connect to the SkyTraq device
    #[arg(short, long)]
    pub port: String,

    /// Baud rate for the selected port
    #[arg(short = 's', long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Time to wait for the acknowledgment, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Pause between sending a command and reading the answer, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub settle_ms: u64,

    /// Also write the configuration to flash
    #[arg(long)]
    pub flash: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn serial_config(&self) -> SerialConfig {
        SerialConfig::new(self.port.clone(), self.baud)
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig::default()
            .with_ack_timeout(Duration::from_millis(self.timeout_ms))
            .with_settle_delay(Duration::from_millis(self.settle_ms))
    }

    pub fn attribute(&self) -> Attribute {
        if self.flash {
            Attribute::SramAndFlash
        } else {
            Attribute::Sram
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select the constellations used for the navigation solution
    Constellation(ConstellationArgs),
    /// Configure SBAS
    Sbas(SbasArgs),
    /// Configure QZSS
    Qzss {
        #[arg(long)]
        disable: bool,
        /// Tracking channels, 0 to 3
        #[arg(long, default_value_t = 1)]
        channels: u8,
    },
    /// Restart the receiver with time and position hints
    Restart(RestartArgs),
    /// Restore factory defaults and reboot
    FactoryReset,
    /// Select normal or power saving mode
    PowerMode {
        #[arg(value_enum)]
        mode: PowerArg,
    },
    /// Set the position update rate
    PositionRate {
        /// One of 1, 2, 4, 5, 8, 10, 20, 25, 40, 50
        rate_hz: u8,
    },
    /// Configure the position pinning thresholds
    PinningParams(PinningParamsArgs),
    /// Enable or disable position pinning
    Pinning {
        #[arg(value_enum)]
        mode: PinningArg,
    },
    /// Configure the DOP mask
    DopMask(DopMaskArgs),
    /// Select the talker id of NMEA sentences
    TalkerId {
        #[arg(value_enum)]
        id: TalkerArg,
    },
}

#[derive(Debug, Args)]
pub struct ConstellationArgs {
    #[arg(long)]
    gps: bool,
    #[arg(long)]
    glonass: bool,
    #[arg(long)]
    galileo: bool,
    #[arg(long)]
    beidou: bool,
    #[arg(long)]
    navic: bool,
}

#[derive(Debug, Args)]
pub struct SbasArgs {
    #[arg(long)]
    disable: bool,
    /// 0: disable, 1: enable, 2: auto
    #[arg(long, default_value_t = 2)]
    ranging: u8,
    /// Ranging URA mask, 0 to 15
    #[arg(long, default_value_t = 8)]
    ura: u8,
    #[arg(long)]
    no_correction: bool,
    /// Tracking channels, 0 to 3
    #[arg(long, default_value_t = 3)]
    channels: u8,
    /// SBAS services to track, repeat for several
    #[arg(long = "system", value_enum, default_values_t = [SbasArg::Waas, SbasArg::Egnos, SbasArg::Msas])]
    systems: Vec<SbasArg>,
}

#[derive(Debug, Args)]
pub struct RestartArgs {
    #[arg(value_enum, default_value_t = RestartArg::Hot)]
    mode: RestartArg,
    /// Latitude in 0.01 degree
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    lat: i16,
    /// Longitude in 0.01 degree
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    lon: i16,
    /// Altitude in meters
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    alt: i16,
    /// Use 2000-01-01 instead of the current UTC time
    #[arg(long)]
    no_time: bool,
}

#[derive(Debug, Args)]
pub struct PinningParamsArgs {
    #[arg(long, default_value_t = 2)]
    pinning_speed: u16,
    #[arg(long, default_value_t = 3)]
    pinning_count: u16,
    #[arg(long, default_value_t = 3)]
    unpinning_speed: u16,
    #[arg(long, default_value_t = 3)]
    unpinning_count: u16,
    #[arg(long, default_value_t = 5)]
    unpinning_distance: u16,
}

#[derive(Debug, Args)]
pub struct DopMaskArgs {
    #[arg(value_enum, default_value_t = DopArg::Auto)]
    mode: DopArg,
    /// Values are in units of 0.1, 5 to 300
    #[arg(long, default_value_t = 50)]
    pdop: u16,
    #[arg(long, default_value_t = 50)]
    hdop: u16,
    #[arg(long, default_value_t = 50)]
    gdop: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SbasArg {
    Waas,
    Egnos,
    Msas,
    Gagan,
    Sdcm,
    Bdsbas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RestartArg {
    Hot,
    Warm,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PowerArg {
    Normal,
    PowerSave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PinningArg {
    Default,
    Enable,
    Disable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DopArg {
    Disable,
    Auto,
    Pdop,
    Hdop,
    Gdop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TalkerArg {
    Gp,
    Gn,
    Auto,
}

/// Serialized command, ready to be handed to the driver
pub struct Request {
    pub name: &'static str,
    pub payload: Vec<u8>,
}

fn request<C: skytraq::Command>(command: &C) -> Result<Request, skytraq::ValidationError> {
    Ok(Request {
        name: C::NAME,
        payload: command.request()?.payload().to_vec(),
    })
}

impl Command {
    pub fn request(
        &self,
        attribute: Attribute,
        now: chrono::NaiveDateTime,
    ) -> Result<Request, skytraq::ValidationError> {
        match self {
            Command::Constellation(args) => {
                let mut constellation = Constellation::empty();
                constellation.set(Constellation::GPS, args.gps);
                constellation.set(Constellation::GLONASS, args.glonass);
                constellation.set(Constellation::GALILEO, args.galileo);
                constellation.set(Constellation::BEIDOU, args.beidou);
                constellation.set(Constellation::NAVIC, args.navic);
                if constellation.is_empty() {
                    constellation = Constellation::default();
                }
                request(&SetConstellation::new(constellation, attribute))
            },
            Command::Sbas(args) => {
                let subsystem = args
                    .systems
                    .iter()
                    .fold(SbasSubsystem::empty(), |acc, s| acc | SbasSubsystem::from(*s));
                request(&SbasConfig {
                    enable: u8::from(!args.disable),
                    ranging: args.ranging,
                    ranging_ura: args.ura,
                    correction: u8::from(!args.no_correction),
                    tracking_channels: args.channels,
                    subsystem,
                    attribute,
                })
            },
            Command::Qzss { disable, channels } => {
                request(&QzssConfig::new(u8::from(!disable), *channels, attribute))
            },
            Command::Restart(args) => {
                let mut restart = SystemRestart::new(RestartMode::from(args.mode))
                    .with_position(args.lat, args.lon, args.alt);
                if !args.no_time {
                    restart = restart.with_time(&now)?;
                }
                request(&restart)
            },
            Command::FactoryReset => request(&FactoryDefault),
            Command::PowerMode { mode } => {
                let mode = match mode {
                    PowerArg::Normal => PowerSaving::Normal,
                    PowerArg::PowerSave => PowerSaving::PowerSave,
                };
                request(&PowerMode::new(mode, attribute))
            },
            Command::PositionRate { rate_hz } => {
                request(&PositionRate::new(*rate_hz, attribute))
            },
            Command::PinningParams(args) => request(&PinningParams {
                pinning_speed: args.pinning_speed,
                pinning_count: args.pinning_count,
                unpinning_speed: args.unpinning_speed,
                unpinning_count: args.unpinning_count,
                unpinning_distance: args.unpinning_distance,
                attribute,
            }),
            Command::Pinning { mode } => {
                let mode = match mode {
                    PinningArg::Default => PinningMode::Default,
                    PinningArg::Enable => PinningMode::Enable,
                    PinningArg::Disable => PinningMode::Disable,
                };
                request(&PositionPinning::new(mode, attribute))
            },
            Command::DopMask(args) => {
                let mode = match args.mode {
                    DopArg::Disable => DopMode::Disable,
                    DopArg::Auto => DopMode::Auto,
                    DopArg::Pdop => DopMode::PdopOnly,
                    DopArg::Hdop => DopMode::HdopOnly,
                    DopArg::Gdop => DopMode::GdopOnly,
                };
                request(&DopMask {
                    mode: mode.into(),
                    pdop: args.pdop,
                    hdop: args.hdop,
                    gdop: args.gdop,
                    attribute,
                })
            },
            Command::TalkerId { id } => {
                let id = match id {
                    TalkerArg::Gp => TalkerId::Gp,
                    TalkerArg::Gn => TalkerId::Gn,
                    TalkerArg::Auto => TalkerId::Auto,
                };
                request(&NmeaTalkerId::new(id, attribute))
            },
        }
    }
}

impl From<SbasArg> for SbasSubsystem {
    fn from(arg: SbasArg) -> Self {
        match arg {
            SbasArg::Waas => SbasSubsystem::WAAS,
            SbasArg::Egnos => SbasSubsystem::EGNOS,
            SbasArg::Msas => SbasSubsystem::MSAS,
            SbasArg::Gagan => SbasSubsystem::GAGAN,
            SbasArg::Sdcm => SbasSubsystem::SDCM,
            SbasArg::Bdsbas => SbasSubsystem::BDSBAS,
        }
    }
}

impl From<RestartArg> for RestartMode {
    fn from(arg: RestartArg) -> Self {
        match arg {
            RestartArg::Hot => RestartMode::Hot,
            RestartArg::Warm => RestartMode::Warm,
            RestartArg::Cold => RestartMode::Cold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn epoch() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn global_options() {
        let cli = parse(&["skytraq-cli", "-p", "/dev/ttyS0", "--flash", "factory-reset"]);
        assert_eq!(cli.baud, DEFAULT_BAUD_RATE);
        assert_eq!(cli.attribute(), Attribute::SramAndFlash);
        assert_eq!(cli.driver_config().ack_timeout, Duration::from_secs(5));
        assert_eq!(cli.serial_config().path, "/dev/ttyS0");
    }

    #[test]
    fn every_subcommand_has_help() {
        use clap::CommandFactory;

        let cli = Cli::command();
        for sub in cli.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no help", sub.get_name());
        }
        let power = cli.find_subcommand("power-mode").unwrap();
        assert_eq!(
            power.get_about().map(|about| about.to_string()).as_deref(),
            Some("Select normal or power saving mode")
        );
    }

    #[test]
    fn constellation_defaults_to_gps() {
        let cli = parse(&["skytraq-cli", "-p", "x", "constellation"]);
        let request = cli.command.request(cli.attribute(), epoch()).unwrap();
        assert_eq!(request.payload, vec![0x64, 0x19, 0x00, 0x01, 0x00]);

        let cli = parse(&["skytraq-cli", "-p", "x", "constellation", "--gps", "--beidou"]);
        let request = cli.command.request(cli.attribute(), epoch()).unwrap();
        assert_eq!(request.payload, vec![0x64, 0x19, 0x00, 0x09, 0x00]);
    }

    #[test]
    fn sbas_defaults() {
        let cli = parse(&["skytraq-cli", "-p", "x", "sbas"]);
        let request = cli.command.request(cli.attribute(), epoch()).unwrap();
        assert_eq!(
            request.payload,
            vec![0x62, 0x01, 0x01, 0x02, 0x08, 0x01, 0x03, 0x07, 0x00]
        );
    }

    #[test]
    fn sbas_rejects_large_ura() {
        let cli = parse(&["skytraq-cli", "-p", "x", "sbas", "--ura", "16"]);
        assert!(cli.command.request(cli.attribute(), epoch()).is_err());
    }

    #[test]
    fn restart_uses_current_time() {
        let cli = parse(&["skytraq-cli", "-p", "x", "restart", "cold", "--lat", "-100"]);
        let request = cli.command.request(cli.attribute(), epoch()).unwrap();
        assert_eq!(request.name, "SYSTEM-RESTART");
        assert_eq!(
            request.payload,
            vec![
                0x01, 0x03, 0x07, 0xe8, 0x01, 0x02, 0x03, 0x04, 0x05, 0xff, 0x9c, 0x00, 0x00, 0x00,
                0x00
            ]
        );
    }
}
