//! Strict parsing of *NMEA 0183* GPS sentences.
//!
//! A sentence is verified against its `*HH` checksum, split into segments and
//! decoded by a table of typed field bindings. Decoding either yields a
//! complete record or the first error encountered.
//!
//! ```ignore
//! use nmea_segment::{Gpgga, Sentence};
//!
//! let gga = Gpgga::parse("$GPGGA,174800.864,4002.741,N,07618.550,W,1,12,1.0,0.0,M,0.0,M,,*70")?;
//! assert_eq!(gga.sat_count, 12);
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;
pub mod checksum;
pub mod coerce;
pub mod err;
pub mod fix;
pub mod gpgga;
pub mod gpgll;
pub mod schema;
pub mod segment;
pub mod sentence;
pub mod symbol;

pub use checksum::verify_checksum;
pub use err::{ChecksumError, Error, FieldError, ParsingError};
pub use fix::{EastWest, NorthSouth};
pub use gpgga::{FixQuality, Gpgga};
pub use gpgll::{DataStatus, Gpgll, Mode};
pub use schema::{Field, Sentence};
pub use segment::SegmentParser;
pub use sentence::{parse_sentence, NmeaSentence};
pub use symbol::Symbol;
