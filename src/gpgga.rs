//! This module provides the *GGA* (global positioning system fix data)
//! sentence of the *NMEA 0183* protocol, as emitted by GPS talkers.

use chrono::NaiveTime;

use fix::{self, EastWest, NorthSouth};
use schema::{Field, Sentence};

symbols! {
    /// Indicator of the type and quality of a GPS fix.
    pub enum FixQuality {
        Invalid => "0",
        /// Standard positioning service.
        Gps => "1",
        Dgps => "2",
        /// Precise positioning service.
        Pps => "3",
        RealTimeKinematic => "4",
        FloatRtk => "5",
        /// Dead reckoning.
        Estimated => "6",
        ManualInput => "7",
        Simulation => "8"
    }
}

/// A GPGGA sentence. Blank numeric fields are `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gpgga {
    /// Time of the fix as `(h)hmmss.sss`; `174831.864` is 17:48:31.864 UTC.
    pub fix_time: f64,
    /// Latitude as `(d)ddmm.mmmm`; `4807.038` is 48° 7.038'.
    pub latitude: f64,
    pub north_south: NorthSouth,
    /// Longitude as `(d)ddmm.mmmm`; `01131.215` is 11° 31.215'.
    pub longitude: f64,
    pub east_west: EastWest,
    pub fix_quality: FixQuality,
    /// Number of satellites used for the fix.
    pub sat_count: i8,
    /// Horizontal dilution of precision.
    pub hdop: f32,
    /// Antenna altitude above/below mean sea level.
    pub altitude: f32,
    /// Unit of `altitude`, always `M`.
    pub altitude_uom: String,
    /// Height of the geoid above the WGS-84 ellipsoid, negative if below.
    pub geoid_height: f32,
    /// Unit of `geoid_height`, always `M`.
    pub geoid_height_uom: String,
    /// Seconds since the last differential correction, `0` without DGPS.
    pub dgps_update_age: f32,
    /// Differential reference station, `0` without DGPS.
    pub dgps_station_id: i16,
}

static FIELDS: [Field<Gpgga>; 14] = [
    Field { index: 1, bind: |p, i, r| r.fix_time = p.as_f64(i) },
    Field { index: 2, bind: |p, i, r| r.latitude = p.as_f64(i) },
    Field { index: 3, bind: |p, i, r| r.north_south = p.as_symbol(i) },
    Field { index: 4, bind: |p, i, r| r.longitude = p.as_f64(i) },
    Field { index: 5, bind: |p, i, r| r.east_west = p.as_symbol(i) },
    Field { index: 6, bind: |p, i, r| r.fix_quality = p.as_symbol(i) },
    Field { index: 7, bind: |p, i, r| r.sat_count = p.as_i8_in_range(i, 0, i8::max_value()) },
    Field { index: 8, bind: |p, i, r| r.hdop = p.as_f32(i) },
    Field { index: 9, bind: |p, i, r| r.altitude = p.as_f32(i) },
    Field { index: 10, bind: |p, i, r| r.altitude_uom = p.require_string(i, "M").to_owned() },
    Field { index: 11, bind: |p, i, r| r.geoid_height = p.as_f32(i) },
    Field { index: 12, bind: |p, i, r| r.geoid_height_uom = p.require_string(i, "M").to_owned() },
    Field { index: 13, bind: |p, i, r| r.dgps_update_age = p.as_f32(i) },
    Field { index: 14, bind: |p, i, r| r.dgps_station_id = p.as_i16(i) },
];

impl Sentence for Gpgga {
    const TAG: &'static str = "GPGGA";
    const SEGMENTS: usize = 15;

    fn fields() -> &'static [Field<Self>] {
        &FIELDS
    }
}

impl Gpgga {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub fn latitude_degrees(&self) -> f64 {
        fix::decimal_degrees(self.latitude) * self.north_south.sign()
    }

    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub fn longitude_degrees(&self) -> f64 {
        fix::decimal_degrees(self.longitude) * self.east_west.sign()
    }

    /// The fix time as a time of day, if it names one.
    pub fn utc(&self) -> Option<NaiveTime> {
        fix::fix_time_to_utc(self.fix_time)
    }

    /// Whether the fix used differential corrections.
    pub fn is_differential(&self) -> bool {
        self.fix_quality == FixQuality::Dgps
    }
}
