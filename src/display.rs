use crate::int::BigInteger;
use crate::lib::{fmt, String, Vec};
use crate::math::{small, Limb, POW10, POW10_DIGITS};

impl fmt::Display for BigInteger {
    /// Decimal digits, most significant first.
    ///
    /// Width, fill, alignment and the `+` flag behave as they do for the
    /// primitive integers.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let x = BigInteger::from(-42);
    /// assert_eq!(format!("{}", x), "-42");
    /// assert_eq!(format!("{:>6}", x), "   -42");
    /// assert_eq!(format!("{:+}", BigInteger::from(7)), "+7");
    /// assert_eq!(format!("{:06}", x), "-00042");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Peel base 10^9 chunks off a private copy of the magnitude.
        let mut magnitude = self.magnitude();
        let mut chunks: Vec<Limb> = Vec::new();
        loop {
            let chunk = small::div_rem(magnitude.as_mut_slice(), POW10[POW10_DIGITS]);
            small::normalize(&mut magnitude);
            chunks.push(chunk);
            if magnitude.as_slice() == [0] {
                break;
            }
        }

        let mut digits = String::with_capacity(chunks.len() * POW10_DIGITS);
        let mut buffer = itoa::Buffer::new();
        let mut iter = chunks.iter().rev();
        if let Some(&leading) = iter.next() {
            digits.push_str(buffer.format(leading));
        }
        for &chunk in iter {
            let s = buffer.format(chunk);
            for _ in s.len()..POW10_DIGITS {
                digits.push('0');
            }
            digits.push_str(s);
        }

        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}
