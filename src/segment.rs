//! The segment parser shared by all sentence schemas.
//!
//! A [SegmentParser](struct.SegmentParser.html) holds the comma-separated
//! segments of one verified sentence and records the first failure of any
//! accessor. Once a failure is recorded, every accessor returns the zero value
//! of its type without looking at the segment, so a schema can request all of
//! its fields in order and check [err](struct.SegmentParser.html#method.err)
//! once at the end.

use arrayvec::ArrayVec;

use checksum::{self, CHECKSUM_LENGTH};
use coerce;
use err::{Error, FieldError, ParsingError};
use symbol::Symbol;

/// Upper bound on the number of segments in a sentence, tag included.
pub const MAX_SEGMENTS: usize = 64;

#[derive(Debug)]
pub struct SegmentParser<'a> {
    sentence: &'a str,
    segments: ArrayVec<[&'a str; MAX_SEGMENTS]>,
    err: Option<ParsingError>,
}

impl<'a> SegmentParser<'a> {
    /// Verifies the checksum of `line` and splits the text between `$` and
    /// `*HH` on `,`. Segment `0` is the sentence tag.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        checksum::verify_checksum(line)?;

        // A verified line starts with `$` and ends in `*HH`.
        let payload = &line[1..line.len() - CHECKSUM_LENGTH - 1];
        let mut segments = ArrayVec::<[&'a str; MAX_SEGMENTS]>::new();
        for segment in payload.split(',') {
            if segments.try_push(segment).is_err() {
                return Err(Error::TooManySegments(segments.capacity()));
            }
        }

        Ok(SegmentParser {
            sentence: line,
            segments,
            err: None,
        })
    }

    /// The complete sentence this parser was created from.
    pub fn sentence(&self) -> &'a str {
        self.sentence
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first recorded failure, if any.
    pub fn err(&self) -> Option<&ParsingError> {
        self.err.as_ref()
    }

    /// Consumes the parser, returning the first recorded failure.
    pub fn finish(self) -> Result<(), ParsingError> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn as_f32(&mut self, i: usize) -> f32 {
        self.coerce(i, coerce::float32)
    }

    pub fn as_f64(&mut self, i: usize) -> f64 {
        self.coerce(i, coerce::float64)
    }

    pub fn as_i8(&mut self, i: usize) -> i8 {
        self.coerce(i, coerce::int8)
    }

    /// Like `as_i8`, but additionally requires `lo <= value <= hi`.
    pub fn as_i8_in_range(&mut self, i: usize, lo: i8, hi: i8) -> i8 {
        self.coerce(i, |raw| coerce::int8_in_range(raw, lo, hi))
    }

    pub fn as_i16(&mut self, i: usize) -> i16 {
        self.coerce(i, coerce::int16)
    }

    pub fn as_i32(&mut self, i: usize) -> i32 {
        self.coerce(i, coerce::int32)
    }

    /// The raw segment text.
    pub fn as_string(&mut self, i: usize) -> &'a str {
        self.segment(i).unwrap_or("")
    }

    /// The raw segment text, which must equal `expected` up to ASCII case.
    pub fn require_string(&mut self, i: usize, expected: &str) -> &'a str {
        self.coerce(i, |raw| coerce::literal(raw, expected))
    }

    /// The raw segment text, which must equal one of `candidates` up to ASCII
    /// case.
    pub fn require_one_of(&mut self, i: usize, candidates: &[&str]) -> &'a str {
        self.coerce(i, |raw| coerce::one_of(raw, candidates))
    }

    pub fn as_symbol<T: Symbol>(&mut self, i: usize) -> T {
        self.coerce(i, coerce::symbol::<T>)
    }

    /// Returns segment `i` unless a failure is already recorded. A missing
    /// segment is recorded as a failure.
    fn segment(&mut self, i: usize) -> Option<&'a str> {
        if self.err.is_some() {
            return None;
        }
        match self.segments.get(i) {
            Some(&raw) => Some(raw),
            None => {
                self.err = Some(ParsingError::new(i, FieldError::OutOfRange));
                None
            }
        }
    }

    fn coerce<T, F>(&mut self, i: usize, f: F) -> T
    where
        T: Default,
        F: FnOnce(&'a str) -> Result<T, FieldError>,
    {
        let raw = match self.segment(i) {
            Some(raw) => raw,
            None => return T::default(),
        };
        match f(raw) {
            Ok(val) => val,
            Err(reason) => {
                self.err = Some(ParsingError::new(i, reason));
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksum::seal;
    use err::ChecksumError;
    use fix::{EastWest, NorthSouth};

    const GOOD: &str = "$GPGGA,002454.123,3553.5295,N,13938.6570,E,1,05,2.2,18.3,M,39.0,M,,*61";

    #[test]
    fn splits_payload() {
        let p = SegmentParser::parse(GOOD).unwrap();
        assert_eq!(p.len(), 15);
        assert_eq!(p.sentence(), GOOD);
        assert!(p.err().is_none());
    }

    #[test]
    fn typed_accessors() {
        let mut p = SegmentParser::parse(GOOD).unwrap();
        assert_eq!(p.require_string(0, "gpgga"), "GPGGA");
        assert_eq!(p.as_f32(1), 2454.123);
        assert_eq!(p.as_f64(2), 3553.5295);
        assert_eq!(p.as_symbol::<NorthSouth>(3), NorthSouth::North);
        assert_eq!(p.as_symbol::<EastWest>(5), EastWest::East);
        assert_eq!(p.as_i8_in_range(6, 0, 8), 1);
        assert_eq!(p.as_i8(7), 5);
        assert_eq!(p.as_i16(7), 5);
        assert_eq!(p.as_i32(7), 5);
        assert_eq!(p.require_one_of(10, &["M", "F"]), "M");
        assert_eq!(p.as_string(13), "");
        assert_eq!(p.as_i32(13), 0);
        assert_eq!(p.as_f32(14), 0.0);
        assert_matches!(p.finish(), Ok(()));
    }

    #[test]
    fn reports_parse_failure() {
        let line = "$GPGGA,bad_FixTime,3553.5295,N,13938.6570,E,1,05,2.2,18.3,M,39.0,M,,*22";
        let mut p = SegmentParser::parse(line).unwrap();
        assert_eq!(p.as_f32(1), 0.0);
        assert_eq!(
            p.err().unwrap().to_string(),
            "sentence segment [1] must be parsable as a float32 but was \"bad_FixTime\""
        );
    }

    #[test]
    fn first_failure_is_sticky() {
        let line = "$GPGGA,bad_FixTime,3553.5295,N,13938.6570,E,1,05,2.2,18.3,M,39.0,M,,*22";
        let mut p = SegmentParser::parse(line).unwrap();
        p.as_f32(1);
        let first = p.err().cloned();

        // Valid, invalid and out of range requests alike are skipped.
        assert_eq!(p.as_f64(2), 0.0);
        assert_eq!(p.as_string(3), "");
        assert_eq!(p.as_symbol::<NorthSouth>(5), NorthSouth::default());
        assert_eq!(p.as_i8_in_range(7, 10, 20), 0);
        assert_eq!(p.require_string(0, "GPGLL"), "");
        assert_eq!(p.require_one_of(3, &["X"]), "");
        assert_eq!(p.as_i32(99), 0);

        assert_eq!(p.err().cloned(), first);
        assert_eq!(p.finish().unwrap_err().segment, 1);
    }

    #[test]
    fn out_of_range_index() {
        let mut p = SegmentParser::parse(GOOD).unwrap();
        assert_eq!(p.as_string(15), "");
        assert_eq!(
            p.err().unwrap().to_string(),
            "sentence segment [15] is out of range"
        );
    }

    #[test]
    fn out_of_range_precedes_type_checks() {
        let mut p = SegmentParser::parse(GOOD).unwrap();
        p.require_string(20, "GPGGA");
        assert_eq!(
            p.finish().unwrap_err(),
            ParsingError::new(20, FieldError::OutOfRange)
        );
    }

    #[test]
    fn range_failure() {
        let mut p = SegmentParser::parse(GOOD).unwrap();
        assert_eq!(p.as_i8_in_range(6, 2, 8), 0);
        assert_eq!(
            p.err().unwrap().to_string(),
            "sentence segment [6] must be within range [2, 8] but was 1"
        );
    }

    #[test]
    fn literal_and_candidate_failures() {
        let mut p = SegmentParser::parse(GOOD).unwrap();
        p.require_string(0, "GPGLL");
        assert_eq!(
            p.err().unwrap().to_string(),
            "sentence segment [0] must be \"GPGLL\" (case insensitive) but was \"GPGGA\""
        );

        let mut p = SegmentParser::parse(GOOD).unwrap();
        p.require_one_of(3, &["S", "W"]);
        assert_eq!(
            p.err().unwrap().to_string(),
            "sentence segment [3] must be one of [S W] (case insensitive) but was \"N\""
        );
    }

    #[test]
    fn checksum_is_verified_first() {
        let err = SegmentParser::parse(
            "$GPGGA,002454.123,3553.5295,N,13938.6570,E,1,05,2.2,18.3,M,39.0,M,,*62",
        ).unwrap_err();
        assert_matches!(err, Error::Checksum(ChecksumError::ChecksumMismatch(_, _)));
    }

    #[test]
    fn empty_payload_has_one_blank_segment() {
        let mut p = SegmentParser::parse("$*00").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.as_string(0), "");
        assert_eq!(p.as_f64(0), 0.0);
        assert!(p.err().is_none());
    }

    #[test]
    fn segment_limit() {
        let fits = seal(&vec!["1"; MAX_SEGMENTS].join(","));
        assert_eq!(SegmentParser::parse(&fits).unwrap().len(), MAX_SEGMENTS);

        let overflow = seal(&vec!["1"; MAX_SEGMENTS + 1].join(","));
        let err = SegmentParser::parse(&overflow).unwrap_err();
        assert_eq!(err, Error::TooManySegments(MAX_SEGMENTS));
        assert_eq!(
            err.to_string(),
            "sentence must not contain more than 64 segments"
        );
    }

    #[test]
    fn repeated_parses_agree() {
        let mut a = SegmentParser::parse(GOOD).unwrap();
        let mut b = SegmentParser::parse(GOOD).unwrap();
        for i in 0..a.len() {
            assert_eq!(a.as_string(i), b.as_string(i));
        }
        assert_eq!(a.as_f64(2).to_bits(), b.as_f64(2).to_bits());
    }
}
