//! This module provides the *GLL* (geographic position, latitude/longitude)
//! sentence of the *NMEA 0183* protocol, as emitted by GPS talkers.

use chrono::NaiveTime;

use fix::{self, EastWest, NorthSouth};
use schema::{Field, Sentence};

symbols! {
    /// Whether the reported position can be trusted.
    pub enum DataStatus {
        Invalid => "V",
        Valid => "A"
    }
}

symbols! {
    /// Operating mode of the positioning system.
    pub enum Mode {
        Invalid => "N",
        Autonomous => "A",
        Differential => "D",
        /// Dead reckoning.
        Estimated => "E",
        ManualInput => "M"
    }
}

/// A GPGLL sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gpgll {
    /// Latitude as `(d)ddmm.mmmm`.
    pub latitude: f64,
    pub north_south: NorthSouth,
    /// Longitude as `(d)ddmm.mmmm`.
    pub longitude: f64,
    pub east_west: EastWest,
    /// Time of the fix as `(h)hmmss.sss`.
    pub fix_time: f64,
    pub data_status: DataStatus,
    pub mode: Mode,
}

static FIELDS: [Field<Gpgll>; 7] = [
    Field { index: 1, bind: |p, i, r| r.latitude = p.as_f64(i) },
    Field { index: 2, bind: |p, i, r| r.north_south = p.as_symbol(i) },
    Field { index: 3, bind: |p, i, r| r.longitude = p.as_f64(i) },
    Field { index: 4, bind: |p, i, r| r.east_west = p.as_symbol(i) },
    Field { index: 5, bind: |p, i, r| r.fix_time = p.as_f64(i) },
    Field { index: 6, bind: |p, i, r| r.data_status = p.as_symbol(i) },
    Field { index: 7, bind: |p, i, r| r.mode = p.as_symbol(i) },
];

impl Sentence for Gpgll {
    const TAG: &'static str = "GPGLL";
    const SEGMENTS: usize = 8;

    fn fields() -> &'static [Field<Self>] {
        &FIELDS
    }
}

impl Gpgll {
    pub fn latitude_degrees(&self) -> f64 {
        fix::decimal_degrees(self.latitude) * self.north_south.sign()
    }

    pub fn longitude_degrees(&self) -> f64 {
        fix::decimal_degrees(self.longitude) * self.east_west.sign()
    }

    pub fn utc(&self) -> Option<NaiveTime> {
        fix::fix_time_to_utc(self.fix_time)
    }

    /// Whether the receiver flagged the position as valid.
    pub fn is_valid(&self) -> bool {
        self.data_status == DataStatus::Valid && self.mode != Mode::Invalid
    }
}
