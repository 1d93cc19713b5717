//! Decimal text to [`BigInteger`].

use crate::error::{Error, ErrorCode, Result};
use crate::int::BigInteger;
use crate::lib::str;
use crate::math::{small, Limb, POW10, POW10_DIGITS};
use crate::store::LimbStore;

impl str::FromStr for BigInteger {
    type Err = Error;

    /// Parse an optional leading `-` followed by ASCII digits.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let x: BigInteger = "-123456789012345678901234567890".parse().unwrap();
    /// assert!(x.is_negative());
    /// assert!("12 34".parse::<BigInteger>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        parse(s, None)
    }
}

impl BigInteger {
    /// Parse decimal text in which digits may be grouped by `separator`.
    ///
    /// The separator may appear anywhere after the optional sign, any
    /// number of times. At least one digit is still required.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let x = BigInteger::from_str_grouped("-1,000,000", ',').unwrap();
    /// assert_eq!(x, BigInteger::from(-1_000_000));
    /// ```
    pub fn from_str_grouped(text: &str, separator: char) -> Result<Self> {
        parse(text, Some(separator))
    }
}

fn parse(text: &str, separator: Option<char>) -> Result<BigInteger> {
    let (negative, body, offset) = match text.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, text, 0),
    };

    // Validate everything before folding any digit.
    let mut digits = 0;
    let mut columns = offset;
    for c in body.chars() {
        columns += 1;
        if c.is_ascii_digit() {
            digits += 1;
        } else if Some(c) != separator {
            return Err(Error::syntax(ErrorCode::InvalidDigit, columns));
        }
    }
    if digits == 0 {
        return Err(Error::syntax(ErrorCode::EmptyNumber, columns + 1));
    }

    let mut value = LimbStore::from_slice(&[0]);
    let mut chunk: Limb = 0;
    let mut count = 0;
    for b in body.bytes().filter(u8::is_ascii_digit) {
        chunk = chunk * 10 + (b - b'0') as Limb;
        count += 1;
        if count == POW10_DIGITS {
            small::imul_add(&mut value, POW10[count], chunk);
            chunk = 0;
            count = 0;
        }
    }
    if count != 0 {
        small::imul_add(&mut value, POW10[count], chunk);
    }
    small::normalize(&mut value);

    Ok(BigInteger::from_magnitude(value, negative))
}
