//! Sentences described as tables of segment bindings.

use err::Error;
use segment::SegmentParser;

/// Reads segment `index` through the parser and stores the result in a
/// record of type `R`.
pub struct Field<R> {
    pub index: usize,
    pub bind: fn(&mut SegmentParser, usize, &mut R),
}

/// A sentence type decoded by a fixed table of fields.
///
/// Implementors only declare their tag and field table; verification,
/// decoding and error reporting are shared.
pub trait Sentence: Default + Sized + 'static {
    /// The tag expected in segment `0`, e.g. `"GPGGA"`.
    const TAG: &'static str;
    /// Number of segments, tag included.
    const SEGMENTS: usize;

    /// Bindings in ascending segment order, starting at segment `1`.
    fn fields() -> &'static [Field<Self>];

    /// Verifies and decodes `line`.
    fn parse(line: &str) -> Result<Self, Error> {
        Self::decode(SegmentParser::parse(line)?)
    }

    /// Decodes an already verified sentence. Either every field is read
    /// successfully or the first failure is returned.
    fn decode(mut parser: SegmentParser) -> Result<Self, Error> {
        let mut record = Self::default();
        parser.require_string(0, Self::TAG);
        for field in Self::fields() {
            (field.bind)(&mut parser, field.index, &mut record);
        }
        parser.finish()?;
        Ok(record)
    }

    /// The tag of this sentence type.
    fn sentence_type(&self) -> &'static str {
        Self::TAG
    }
}
