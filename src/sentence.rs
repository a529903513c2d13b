//! Decoding of any supported sentence, selected by its tag.

use err::Error;
use gpgga::Gpgga;
use gpgll::Gpgll;
use schema::Sentence;
use segment::SegmentParser;

const TAGS: &[&str] = &[Gpgga::TAG, Gpgll::TAG];

/// One decoded sentence of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    Gpgga(Gpgga),
    Gpgll(Gpgll),
}

impl NmeaSentence {
    pub fn sentence_type(&self) -> &'static str {
        match *self {
            NmeaSentence::Gpgga(ref s) => s.sentence_type(),
            NmeaSentence::Gpgll(ref s) => s.sentence_type(),
        }
    }
}

/// Verifies `line` once and decodes it with the schema named by its tag.
pub fn parse_sentence(line: &str) -> Result<NmeaSentence, Error> {
    let mut parser = SegmentParser::parse(line)?;
    let tag = parser.require_one_of(0, TAGS);
    if let Some(err) = parser.err() {
        return Err(err.clone().into());
    }

    if tag.eq_ignore_ascii_case(Gpgga::TAG) {
        Gpgga::decode(parser).map(NmeaSentence::Gpgga)
    } else {
        Gpgll::decode(parser).map(NmeaSentence::Gpgll)
    }
}
