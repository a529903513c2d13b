//! Verification of the `$...*HH` envelope of a sentence.

use err::ChecksumError;

/// Number of hex digits following `*`.
pub const CHECKSUM_LENGTH: usize = 2;

/// Verifies that `line` starts with `$` and ends in `*HH`, where `HH` is the
/// XOR of every byte between `$` and `*` as two hex digits (either case).
///
/// Scanning stops at the first `*`. `$` and `*` never take part in the XOR.
pub fn verify_checksum(line: &str) -> Result<(), ChecksumError> {
    match line.chars().next() {
        None => return Err(ChecksumError::NoChecksum),
        Some('$') => (),
        Some(c) => return Err(ChecksumError::InvalidStart(c)),
    }

    let mut calculated = 0u8;
    for (i, &b) in line.as_bytes().iter().enumerate().skip(1) {
        if b != b'*' {
            calculated ^= b;
            continue;
        }

        let remaining = line.len() - i - 1;
        if remaining != CHECKSUM_LENGTH {
            return Err(ChecksumError::ChecksumLength(remaining));
        }

        // `*` is ASCII, so `i + 1` is a char boundary.
        let advertised = line[i + 1..].to_uppercase();
        let calculated = format!("{:02X}", calculated);
        if calculated != advertised {
            return Err(ChecksumError::ChecksumMismatch(calculated, advertised));
        }
        return Ok(());
    }

    Err(ChecksumError::NoChecksum)
}

/// Wraps `payload` into `$payload*HH` with a correct checksum.
#[cfg(test)]
pub fn seal(payload: &str) -> String {
    let sum = payload.bytes().fold(0u8, |acc, b| acc ^ b);
    format!("${}*{:02X}", payload, sum)
}
