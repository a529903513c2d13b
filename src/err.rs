use std::{error, fmt};

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Error {
        Checksum(err: ChecksumError) {
            from()
            description("Checksum error")
            display("{}", err)
            cause(err)
        }
        Parsing(err: ParsingError) {
            from()
            description("Parsing error")
            display("{}", err)
            cause(err)
        }
        TooManySegments(capacity: usize) {
            description("Too many segments")
            display("sentence must not contain more than {} segments", capacity)
        }
    }
}

quick_error! {
    /// Failures of the `$...*HH` envelope.
    ///
    /// `InvalidStart` and `ChecksumLength` describe a malformed sentence, the
    /// other two a missing or wrong checksum.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ChecksumError {
        InvalidStart(c: char) {
            description("Malformed sentence")
            display("character [0] must be \"$\" but was \"{}\"", c)
        }
        ChecksumLength(remaining: usize) {
            description("Malformed sentence")
            display("there must be exactly 2 characters remaining after \"*\" but there was/were {}", remaining)
        }
        NoChecksum {
            description("No checksum")
            display("sentence does not contain a checksum")
        }
        ChecksumMismatch(calculated: String, advertised: String) {
            description("Checksum mismatch")
            display("calculated checksum value \"{}\" does not match sentence-specified value of \"{}\"",
                calculated, advertised)
        }
    }
}

impl ChecksumError {
    /// Returns `true` if the envelope itself is broken rather than the
    /// checksum value.
    pub fn is_malformed(&self) -> bool {
        match *self {
            ChecksumError::InvalidStart(_) | ChecksumError::ChecksumLength(_) => true,
            _ => false,
        }
    }
}

quick_error! {
    /// Why a single segment was rejected. The rendered message omits the
    /// segment index; see [ParsingError](struct.ParsingError.html).
    #[derive(Debug, Clone, PartialEq)]
    pub enum FieldError {
        OutOfRange {
            description("Segment index out of range")
            display("is out of range")
        }
        NotFloat(width: &'static str, raw: String) {
            description("Invalid float")
            display("must be parsable as a {} but was \"{}\"", width, raw)
        }
        NotInteger(width: &'static str, raw: String) {
            description("Invalid integer")
            display("must be parsable as an {} but was \"{}\"", width, raw)
        }
        NotWithin(lo: i64, hi: i64, raw: String) {
            description("Integer out of bounds")
            display("must be within range [{}, {}] but was {}", lo, hi, raw)
        }
        NotLiteral(expected: String, raw: String) {
            description("Unexpected literal")
            display("must be \"{}\" (case insensitive) but was \"{}\"", expected, raw)
        }
        NotOneOf(candidates: Vec<String>, raw: String) {
            description("Unexpected value")
            display("must be one of [{}] (case insensitive) but was \"{}\"", candidates.join(" "), raw)
        }
        NotSymbol(name: &'static str, raw: String) {
            description("Unknown symbol")
            display("must be parsable as {} {} but was \"{}\"", article(name), name, raw)
        }
    }
}

/// Picks the indefinite article for a type name ("a FixQuality", "an EastWest").
fn article(name: &str) -> &'static str {
    match name.chars().next() {
        Some(c) if "AEIOUaeiou".contains(c) => "an",
        _ => "a",
    }
}

/// A segment-scoped failure. Segment `0` is the sentence tag, data fields
/// follow in sentence order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingError {
    pub segment: usize,
    pub reason: FieldError,
}

impl ParsingError {
    pub fn new(segment: usize, reason: FieldError) -> Self {
        ParsingError { segment, reason }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sentence segment [{}] {}", self.segment, self.reason)
    }
}

impl error::Error for ParsingError {
    fn description(&self) -> &str {
        "Parsing error"
    }

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.reason)
    }
}
