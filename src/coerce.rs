//! Conversions from the raw text of a single segment into typed values.
//!
//! Every coercer is a pure function over the segment text. Numeric coercers
//! treat an empty segment as zero so that optional fields may be left blank.

use std::str::FromStr;

use err::FieldError;
use symbol::Symbol;

#[inline]
pub fn float32(raw: &str) -> Result<f32, FieldError> {
    float(raw, "float32")
}

#[inline]
pub fn float64(raw: &str) -> Result<f64, FieldError> {
    float(raw, "float64")
}

#[inline]
pub fn int8(raw: &str) -> Result<i8, FieldError> {
    integer(raw, "int8")
}

#[inline]
pub fn int16(raw: &str) -> Result<i16, FieldError> {
    integer(raw, "int16")
}

#[inline]
pub fn int32(raw: &str) -> Result<i32, FieldError> {
    integer(raw, "int32")
}

/// Parses `raw` as an `i8` within `lo..=hi`.
pub fn int8_in_range(raw: &str, lo: i8, hi: i8) -> Result<i8, FieldError> {
    let val = int8(raw)?;
    if val < lo || val > hi {
        return Err(FieldError::NotWithin(
            i64::from(lo),
            i64::from(hi),
            raw.to_owned(),
        ));
    }
    Ok(val)
}

/// Accepts `raw` if it equals `expected`, ignoring ASCII case.
pub fn literal<'a>(raw: &'a str, expected: &str) -> Result<&'a str, FieldError> {
    if raw.eq_ignore_ascii_case(expected) {
        Ok(raw)
    } else {
        Err(FieldError::NotLiteral(expected.to_owned(), raw.to_owned()))
    }
}

/// Accepts `raw` if it equals any of `candidates`, ignoring ASCII case.
pub fn one_of<'a>(raw: &'a str, candidates: &[&str]) -> Result<&'a str, FieldError> {
    if candidates.iter().any(|c| raw.eq_ignore_ascii_case(c)) {
        Ok(raw)
    } else {
        Err(FieldError::NotOneOf(
            candidates.iter().map(|c| c.to_string()).collect(),
            raw.to_owned(),
        ))
    }
}

pub fn symbol<T: Symbol>(raw: &str) -> Result<T, FieldError> {
    T::from_symbol(raw).ok_or_else(|| FieldError::NotSymbol(T::NAME, raw.to_owned()))
}

fn integer<T: FromStr + Default>(raw: &str, width: &'static str) -> Result<T, FieldError> {
    if raw.is_empty() {
        return Ok(T::default());
    }
    T::from_str(raw).map_err(|_| FieldError::NotInteger(width, raw.to_owned()))
}

fn float<T>(raw: &str, width: &'static str) -> Result<T, FieldError>
where
    T: FromStr + Default + Copy + Into<f64>,
{
    if raw.is_empty() {
        return Ok(T::default());
    }
    let err = || FieldError::NotFloat(width, raw.to_owned());
    let val = T::from_str(raw).map_err(|_| err())?;

    // Overflow saturates to infinity, which only an explicit "inf" may produce.
    if val.into().is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
        return Err(err());
    }
    Ok(val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fix::NorthSouth;

    #[test]
    fn blank_numbers_are_zero() {
        assert_eq!(float32(""), Ok(0.0));
        assert_eq!(float64(""), Ok(0.0));
        assert_eq!(int8(""), Ok(0));
        assert_eq!(int16(""), Ok(0));
        assert_eq!(int32(""), Ok(0));
        assert_eq!(int8_in_range("", 0, 8), Ok(0));
    }

    #[test]
    fn floats() {
        assert_eq!(float64("4002.741"), Ok(4002.741));
        assert_eq!(float64("-24.1"), Ok(-24.1));
        assert_eq!(float32("1.03"), Ok(1.03));
        assert_eq!(
            float32("bad_FixTime").unwrap_err().to_string(),
            "must be parsable as a float32 but was \"bad_FixTime\""
        );
        assert_eq!(
            float64("1.2.3").unwrap_err().to_string(),
            "must be parsable as a float64 but was \"1.2.3\""
        );
    }

    #[test]
    fn float32_overflow_is_rejected() {
        assert_matches!(float32("1e40"), Err(FieldError::NotFloat("float32", _)));
        assert_eq!(float64("1e40"), Ok(1e40));
    }

    #[test]
    fn integers_respect_width() {
        assert_eq!(int8("127"), Ok(127));
        assert_eq!(int8("-12"), Ok(-12));
        assert_eq!(int16("0042"), Ok(42));
        assert_eq!(int32("70000"), Ok(70000));
        assert_eq!(
            int8("128").unwrap_err().to_string(),
            "must be parsable as an int8 but was \"128\""
        );
        assert_eq!(
            int16("1.5").unwrap_err().to_string(),
            "must be parsable as an int16 but was \"1.5\""
        );
        assert_eq!(
            int32("x").unwrap_err().to_string(),
            "must be parsable as an int32 but was \"x\""
        );
    }

    #[test]
    fn bounded_integers() {
        assert_eq!(int8_in_range("8", 0, 8), Ok(8));
        assert_eq!(
            int8_in_range("9", 0, 8).unwrap_err().to_string(),
            "must be within range [0, 8] but was 9"
        );
        assert_eq!(
            int8_in_range("-1", 0, 8).unwrap_err().to_string(),
            "must be within range [0, 8] but was -1"
        );
        // The parse failure wins over the bounds check.
        assert_matches!(int8_in_range("300", 0, 8), Err(FieldError::NotInteger("int8", _)));
    }

    #[test]
    fn literals() {
        assert_eq!(literal("gpgga", "GPGGA"), Ok("gpgga"));
        assert_eq!(
            literal("GAAAA", "GPGGA").unwrap_err().to_string(),
            "must be \"GPGGA\" (case insensitive) but was \"GAAAA\""
        );
        assert_matches!(literal("", "M"), Err(FieldError::NotLiteral(_, _)));
    }

    #[test]
    fn candidates() {
        assert_eq!(one_of("s", &["N", "S"]), Ok("s"));
        assert_eq!(
            one_of("X", &["N", "S"]).unwrap_err().to_string(),
            "must be one of [N S] (case insensitive) but was \"X\""
        );
        assert_matches!(one_of("NS", &["N", "S"]), Err(FieldError::NotOneOf(_, _)));
    }

    #[test]
    fn symbols() {
        assert_eq!(symbol::<NorthSouth>("s"), Ok(NorthSouth::South));
        assert_eq!(
            symbol::<NorthSouth>("X").unwrap_err().to_string(),
            "must be parsable as a NorthSouth but was \"X\""
        );
    }
}
