//! Parsing and formatting: `[+-]?[0-9]+` in, zero-padded limb groups out.

use crate::error::ParseIntError;
use crate::int::Int;
use crate::limbs::normalize;
use std::fmt;
use std::io::{self, BufRead, Read};
use std::str::FromStr;

/// Groups the decimal digits of `digits` (no sign, no leading/trailing
/// whitespace) into base-10000 limbs, four decimal digits per limb, read
/// from the right. Shared by [`FromStr for Int`] and by unit tests in
/// sibling modules that need a magnitude built from a literal without
/// going through the full signed parser.
pub(crate) fn magnitude_from_digits(digits: &str) -> Vec<u16> {
    let bytes = digits.as_bytes();
    let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);

    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(4);
        let mut value: u32 = 0;
        for &b in &bytes[start..end] {
            value = value * 10 + (b - b'0') as u32;
        }
        limbs.push(value as u16);
        end = start;
    }

    if limbs.is_empty() {
        limbs.push(0);
    }

    normalize(&mut limbs);
    limbs
}

impl FromStr for Int {
    type Err = ParseIntError;

    /// Parses `[+-]?[0-9]+`. No leading/trailing whitespace is accepted;
    /// callers must strip it first. `-0` (and any sign on an all-zero
    /// magnitude) parses to the canonical positive zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ParseIntError::Empty);
        }

        let (sign, digit_start) = match bytes[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        if digit_start == bytes.len() {
            return Err(ParseIntError::Empty);
        }

        for (offset, &b) in bytes.iter().enumerate().skip(digit_start) {
            if !b.is_ascii_digit() {
                return Err(ParseIntError::InvalidDigit(offset));
            }
        }

        let limbs = magnitude_from_digits(&s[digit_start..]);
        let sign = sign && !(limbs.len() == 1 && limbs[0] == 0);

        Ok(Int { sign, limbs })
    }
}

impl fmt::Display for Int {
    /// Emits `-` for negative values, then the most-significant limb
    /// unpadded, then every remaining limb zero-padded to four digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign {
            f.write_str("-")?;
        }

        let mut iter = self.limbs.iter().rev();
        // `limbs` is never empty (canonical-form invariant), so this
        // unwrap can't fail.
        write!(f, "{}", iter.next().unwrap())?;

        for limb in iter {
            write!(f, "{:04}", limb)?;
        }

        Ok(())
    }
}

/// Reads one whitespace-delimited token from `reader` and parses it as
/// an [`Int`]. Mirrors the stream-extraction contract of `operator>>`:
/// whitespace (including leading) is skipped by the tokenizer, and only
/// a malformed token itself is reported as an error.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Int> {
    let mut token = String::new();
    let mut started = false;

    for byte in reader.bytes() {
        let byte = byte?;
        let ch = byte as char;

        if ch.is_whitespace() {
            if started {
                break;
            }
            continue;
        }

        started = true;
        token.push(ch);
    }

    if token.is_empty() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no token available"));
    }

    token
        .parse::<Int>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_decimals() {
        assert_eq!("0".parse::<Int>().unwrap().to_string(), "0");
        assert_eq!("+0".parse::<Int>().unwrap().to_string(), "0");
        assert_eq!("-0".parse::<Int>().unwrap().to_string(), "0");
        assert_eq!("123".parse::<Int>().unwrap().to_string(), "123");
        assert_eq!("-123".parse::<Int>().unwrap().to_string(), "-123");
        assert_eq!("+123".parse::<Int>().unwrap().to_string(), "123");
    }

    #[test]
    fn negative_zero_is_canonical_positive_zero() {
        let z = "-0".parse::<Int>().unwrap();
        assert!(!z.sign);
        assert_eq!(z.limbs, vec![0]);
    }

    #[test]
    fn round_trips_large_values() {
        let s = "-2333333333333333333333333333333333333333333333333333333";
        let n: Int = s.parse().unwrap();
        assert_eq!(n.to_string(), s);
    }

    #[test]
    fn zero_padded_grouping() {
        let n: Int = "100020003".parse().unwrap();
        assert_eq!(n.to_string(), "100020003");
    }

    #[test]
    fn rejects_empty_and_bad_digits() {
        assert_eq!("".parse::<Int>(), Err(ParseIntError::Empty));
        assert_eq!("-".parse::<Int>(), Err(ParseIntError::Empty));
        assert_eq!("12a3".parse::<Int>(), Err(ParseIntError::InvalidDigit(2)));
    }

    #[test]
    fn read_token_skips_leading_whitespace_and_stops_at_trailing() {
        let mut cursor = io::Cursor::new(b"  -42 17".to_vec());
        let mut reader = io::BufReader::new(&mut cursor);
        let first = read_token(&mut reader).unwrap();
        assert_eq!(first.to_string(), "-42");
        let second = read_token(&mut reader).unwrap();
        assert_eq!(second.to_string(), "17");
    }
}
