//! Position and time components shared by the fix sentences.

use chrono::NaiveTime;

symbols! {
    /// The hemisphere of a latitude value.
    pub enum NorthSouth {
        North => "N",
        South => "S"
    }
}

symbols! {
    /// The hemisphere of a longitude value.
    pub enum EastWest {
        East => "E",
        West => "W"
    }
}

impl NorthSouth {
    #[inline]
    pub fn sign(&self) -> f64 {
        match *self {
            NorthSouth::North => 1.0,
            NorthSouth::South => -1.0,
        }
    }
}

impl EastWest {
    #[inline]
    pub fn sign(&self) -> f64 {
        match *self {
            EastWest::East => 1.0,
            EastWest::West => -1.0,
        }
    }
}

/// Converts an unsigned `(d)ddmm.mmmm` angle into decimal degrees.
///
/// `4807.038` (48° 7.038') becomes `48.1173`.
pub fn decimal_degrees(ddmm: f64) -> f64 {
    let degrees = (ddmm / 100.0).trunc();
    let minutes = ddmm - degrees * 100.0;
    degrees + minutes / 60.0
}

/// Converts a `(h)hmmss.sss` fix time into a time of day.
///
/// Returns `None` if the value is negative or names a time that does not
/// exist, e.g. `256000`. Precision is rounded to milliseconds.
pub fn fix_time_to_utc(fix_time: f64) -> Option<NaiveTime> {
    if !fix_time.is_finite() || fix_time < 0.0 {
        return None;
    }
    let millis = (fix_time * 1000.0).round() as u64;
    let hour = millis / 10_000_000;
    let min = millis / 100_000 % 100;
    let sec = millis / 1000 % 100;
    if hour > 23 {
        return None;
    }
    NaiveTime::from_hms_milli_opt(hour as u32, min as u32, sec as u32, (millis % 1000) as u32)
}
