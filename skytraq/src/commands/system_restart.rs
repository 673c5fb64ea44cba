use chrono::{Datelike, NaiveDateTime, Timelike};

use super::{check_range, Command, CommandRequest};
use crate::ValidationError;

/// GPS epoch year, the earliest time hint accepted
const MIN_YEAR: u16 = 1980;

/// Named values of [`SystemRestart::mode`]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestartMode {
    /// Keeps ephemeris and almanac
    Hot = 1,
    /// Clears the ephemeris
    Warm = 2,
    /// Clears everything
    Cold = 3,
}

impl From<RestartMode> for u8 {
    fn from(mode: RestartMode) -> u8 {
        mode as u8
    }
}

/// System Restart, with an optional UTC time and position hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemRestart {
    pub mode: u8,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Latitude in 0.01 degree, positive north
    pub latitude: i16,
    /// Longitude in 0.01 degree, positive east
    pub longitude: i16,
    /// Altitude in meters
    pub altitude: i16,
}

impl SystemRestart {
    /// Restart at 2000-01-01 00:00:00 UTC, position 0/0/0
    pub fn new(mode: impl Into<u8>) -> Self {
        Self {
            mode: mode.into(),
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            latitude: 0,
            longitude: 0,
            altitude: 0,
        }
    }

    /// Uses `utc` as time hint, fails for years the receiver cannot encode
    pub fn with_time(mut self, utc: &NaiveDateTime) -> Result<Self, ValidationError> {
        check_range(Self::NAME, "year", utc.year(), MIN_YEAR.into(), u16::MAX.into())?;
        self.year = u16::try_from(utc.year()).unwrap_or(MIN_YEAR);
        // chrono keeps these within their calendar ranges
        self.month = utc.month() as u8;
        self.day = utc.day() as u8;
        self.hour = utc.hour() as u8;
        self.minute = utc.minute() as u8;
        self.second = utc.second().min(59) as u8;
        Ok(self)
    }

    pub fn with_position(mut self, latitude: i16, longitude: i16, altitude: i16) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self.altitude = altitude;
        self
    }
}

impl Command for SystemRestart {
    const NAME: &'static str = "SYSTEM-RESTART";
    const ID: &'static [u8] = &[0x01];

    fn validate(&self) -> Result<(), ValidationError> {
        check_range(Self::NAME, "mode", self.mode, 1, 3)?;
        check_range(Self::NAME, "year", self.year, MIN_YEAR, u16::MAX)?;
        check_range(Self::NAME, "month", self.month, 1, 12)?;
        check_range(Self::NAME, "day", self.day, 1, 31)?;
        check_range(Self::NAME, "hour", self.hour, 0, 23)?;
        check_range(Self::NAME, "minute", self.minute, 0, 59)?;
        check_range(Self::NAME, "second", self.second, 0, 59)?;
        check_range(Self::NAME, "latitude", self.latitude, -9000, 9000)?;
        check_range(Self::NAME, "longitude", self.longitude, -18000, 18000)?;
        check_range(Self::NAME, "altitude", self.altitude, -1000, 18300)
    }

    fn write_request(&self, request: CommandRequest) -> CommandRequest {
        request
            .u8(self.mode)
            .u16(self.year)
            .u8(self.month)
            .u8(self.day)
            .u8(self.hour)
            .u8(self.minute)
            .u8(self.second)
            .i16(self.latitude)
            .i16(self.longitude)
            .i16(self.altitude)
    }
}
