//! Arbitrary-precision integer in infinite two's complement.
//!
//! A [`BigInteger`] stores its limbs least significant first and a single
//! flag saying what every limb past the stored ones looks like: all zero bits
//! for non-negative values, all one bits for negative values. Reading limbs
//! through [`BigInteger::limb`] extends the stored sequence with that fill,
//! so addition, bitwise operators and shifts treat operands of any length
//! and sign uniformly.

use crate::lib::{cmp, hash, Ordering};
use crate::math::{join_u128, scalar, split_u128, Limb, LIMB_BITS};
use crate::store::LimbStore;

/// An integer of unbounded size.
///
/// Cloning is cheap: values longer than [`INLINE_LIMBS`] share their limb
/// buffer until one of the copies is modified.
///
/// ```
/// use limbint::BigInteger;
///
/// let a = BigInteger::from(1000000007u32);
/// let b = BigInteger::from(1000000009u32);
/// assert_eq!((a * b).to_string(), "1000000016000000063");
///
/// let c: BigInteger = "-7".parse().unwrap();
/// assert_eq!(&c / 2i32, BigInteger::from(-3));
/// assert_eq!(&c % 2i32, BigInteger::from(-1));
/// ```
///
/// [`INLINE_LIMBS`]: crate::INLINE_LIMBS
#[derive(Clone)]
pub struct BigInteger {
    /// Limbs in little-endian order. Never empty.
    limbs: LimbStore,
    /// Whether the implied limbs above `limbs` are all ones.
    negative_fill: bool,
}

impl BigInteger {
    /// Zero.
    #[inline]
    pub fn zero() -> Self {
        BigInteger {
            limbs: LimbStore::from_slice(&[0]),
            negative_fill: false,
        }
    }

    /// One.
    #[inline]
    pub fn one() -> Self {
        BigInteger {
            limbs: LimbStore::from_slice(&[1]),
            negative_fill: false,
        }
    }

    /// Build a value from a normalized magnitude and a sign.
    pub(crate) fn from_magnitude(mut limbs: LimbStore, negative: bool) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }
        let mut x = BigInteger {
            limbs,
            negative_fill: false,
        };
        x.canonicalize();
        if negative {
            x.negate();
        }
        x
    }

    pub(crate) fn from_u128(n: u128) -> Self {
        let used = (128 - n.leading_zeros() as usize + LIMB_BITS - 1) / LIMB_BITS;
        let limbs = split_u128(n);
        BigInteger {
            limbs: LimbStore::from_slice(&limbs[..cmp::max(used, 1)]),
            negative_fill: false,
        }
    }

    pub(crate) fn from_i128(n: i128) -> Self {
        let mut x = BigInteger::from_u128(n.unsigned_abs());
        if n < 0 {
            x.negate();
        }
        x
    }

    // ACCESSORS

    /// The limb every position past the stored limbs holds.
    #[inline]
    fn fill(&self) -> Limb {
        if self.negative_fill {
            Limb::MAX
        } else {
            0
        }
    }

    /// Limb `index` of the two's complement representation.
    ///
    /// Positions past the stored limbs read as `0` for non-negative values
    /// and `0xFFFF_FFFF` for negative values.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let x = BigInteger::from(-2);
    /// assert_eq!(x.limb(0), 0xFFFF_FFFE);
    /// assert_eq!(x.limb(100), 0xFFFF_FFFF);
    /// ```
    #[inline]
    pub fn limb(&self, index: usize) -> Limb {
        match self.limbs.as_slice().get(index) {
            Some(&limb) => limb,
            None => self.fill(),
        }
    }

    /// The stored limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    /// The underlying limb container.
    #[inline]
    pub fn store(&self) -> &LimbStore {
        &self.limbs
    }

    /// Returns true if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative_fill
    }

    /// Returns true if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative_fill && !self.is_zero()
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.negative_fill && self.limbs.as_slice() == [0]
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.negative_fill {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInteger {
        let mut x = self.clone();
        if x.negative_fill {
            x.negate();
        }
        x
    }

    /// Limbs of the absolute value, normalized.
    pub(crate) fn magnitude(&self) -> LimbStore {
        if self.negative_fill {
            let mut x = self.clone();
            x.negate();
            x.limbs
        } else {
            self.limbs.clone()
        }
    }

    // CONVERSIONS

    /// Returns the value as `u128` if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative_fill || self.limbs.len() > 4 {
            None
        } else {
            Some(join_u128(self.limbs()))
        }
    }

    /// Returns the value as `i128` if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        let len = self.limbs.len();
        if len > 4 {
            return None;
        }
        let mut limbs = [self.fill(); 4];
        limbs[..len].copy_from_slice(self.limbs());
        let value = join_u128(&limbs) as i128;
        if (value < 0) == self.negative_fill {
            Some(value)
        } else {
            None
        }
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    /// Returns the value as `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    /// Returns true if the value can be represented by `u64`.
    #[inline]
    pub fn is_u64(&self) -> bool {
        self.to_u64().is_some()
    }

    /// Returns true if the value can be represented by `i64`.
    #[inline]
    pub fn is_i64(&self) -> bool {
        self.to_i64().is_some()
    }

    // NORMALIZE

    /// Drop high limbs that repeat the fill, keeping at least one limb.
    #[inline]
    pub(crate) fn canonicalize(&mut self) {
        let fill = self.fill();
        while self.limbs.len() > 1 && self.limbs.last() == Some(fill) {
            self.limbs.pop();
        }
    }

    // ADDITION

    /// AddAssign for big integers of any sign.
    pub(crate) fn add_in_place(&mut self, rhs: &BigInteger) {
        let len = cmp::max(self.limbs.len(), rhs.limbs.len());
        let fill = self.fill();
        self.limbs.resize(len, fill);

        let mut carry = false;
        for (i, xi) in self.limbs.as_mut_slice().iter_mut().enumerate() {
            let (v, c) = scalar::add(*xi, rhs.limb(i), carry);
            *xi = v;
            carry = c;
        }

        // Add the fills plus the carry to settle the limbs above `len`.
        match (self.negative_fill, rhs.negative_fill, carry) {
            (false, false, false) | (true, true, true) => {}
            (false, false, true) => self.limbs.push(1),
            (true, true, false) => self.limbs.push(Limb::MAX - 1),
            (_, _, carry) => self.negative_fill = !carry,
        }
        self.canonicalize();
    }

    /// SubAssign for big integers of any sign.
    pub(crate) fn sub_in_place(&mut self, rhs: &BigInteger) {
        let mut negated = rhs.clone();
        negated.negate();
        self.add_in_place(&negated);
    }

    /// Replace the value with its bitwise complement, `-x - 1`.
    pub(crate) fn not_in_place(&mut self) {
        for xi in self.limbs.as_mut_slice() {
            *xi = !*xi;
        }
        self.negative_fill = !self.negative_fill;
    }

    /// Replace the value with its negation.
    pub(crate) fn negate(&mut self) {
        self.not_in_place();
        self.add_in_place(&BigInteger::one());
    }

    /// Add one, returning the updated value.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let mut x = BigInteger::from(-1);
    /// assert!(x.increment().is_zero());
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        self.add_in_place(&BigInteger::one());
        self
    }

    /// Subtract one, returning the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_in_place(&BigInteger::one());
        self
    }

    /// Add one, returning the value from before the update.
    pub fn post_increment(&mut self) -> BigInteger {
        let old = self.clone();
        self.increment();
        old
    }

    /// Subtract one, returning the value from before the update.
    pub fn post_decrement(&mut self) -> BigInteger {
        let old = self.clone();
        self.decrement();
        old
    }

    // MULTIPLICATION

    /// MulAssign on magnitudes, reapplying the sign afterwards.
    pub(crate) fn mul_in_place(&mut self, rhs: &BigInteger) {
        let negative = self.negative_fill != rhs.negative_fill;
        let x = self.magnitude();
        let y = rhs.magnitude();
        let z = crate::math::large::mul(x.as_slice(), y.as_slice());
        *self = BigInteger::from_magnitude(z, negative);
    }

    // BITWISE

    /// Apply `op` limb by limb over the fill-extended operands, and to the
    /// fills themselves.
    fn bitwise_in_place<F>(&mut self, rhs: &BigInteger, op: F)
    where
        F: Fn(Limb, Limb) -> Limb,
    {
        let len = cmp::max(self.limbs.len(), rhs.limbs.len());
        let fill = self.fill();
        self.limbs.resize(len, fill);
        for (i, xi) in self.limbs.as_mut_slice().iter_mut().enumerate() {
            *xi = op(*xi, rhs.limb(i));
        }
        self.negative_fill = op(fill, rhs.fill()) != 0;
        self.canonicalize();
    }

    pub(crate) fn and_in_place(&mut self, rhs: &BigInteger) {
        self.bitwise_in_place(rhs, |x, y| x & y);
    }

    pub(crate) fn or_in_place(&mut self, rhs: &BigInteger) {
        self.bitwise_in_place(rhs, |x, y| x | y);
    }

    pub(crate) fn xor_in_place(&mut self, rhs: &BigInteger) {
        self.bitwise_in_place(rhs, |x, y| x ^ y);
    }

    // SHIFTS

    /// Shift left by `n` bits, multiplying by `2^n`.
    pub(crate) fn shl_in_place(&mut self, n: usize) {
        if self.is_zero() {
            return;
        }
        let limbs = n / LIMB_BITS;
        let bits = (n % LIMB_BITS) as u32;

        if limbs != 0 {
            let len = self.limbs.len();
            self.limbs.resize(len + limbs, 0);
            let xs = self.limbs.as_mut_slice();
            xs.copy_within(..len, limbs);
            for xi in &mut xs[..limbs] {
                *xi = 0;
            }
        }

        if bits != 0 {
            // The extra limb receives the bits shifted out of the old top
            // limb; everything above it keeps shifting in copies of the fill.
            let len = self.limbs.len();
            let fill = self.fill();
            self.limbs.resize(len + 1, fill);
            crate::math::small::ishl_bits(self.limbs.as_mut_slice(), bits);
        }
        self.canonicalize();
    }

    /// Arithmetic shift right by `n` bits, dividing by `2^n` rounding toward
    /// negative infinity.
    pub(crate) fn shr_in_place(&mut self, n: usize) {
        let limbs = n / LIMB_BITS;
        let bits = (n % LIMB_BITS) as u32;
        let len = self.limbs.len();
        let fill = self.fill();

        if limbs >= len {
            *self = BigInteger {
                limbs: LimbStore::from_slice(&[fill]),
                negative_fill: self.negative_fill,
            };
            return;
        }

        if limbs != 0 {
            self.limbs.as_mut_slice().copy_within(limbs.., 0);
            for _ in 0..limbs {
                self.limbs.pop();
            }
        }
        crate::math::small::ishr_bits(self.limbs.as_mut_slice(), bits, fill);
        self.canonicalize();
    }
}

impl Default for BigInteger {
    #[inline]
    fn default() -> Self {
        BigInteger::zero()
    }
}

// RELATIVE OPERATORS

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative_fill, other.negative_fill) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => {
                // Among canonical negative values the longer one is further
                // from zero.
                let by_len = self.limbs.len().cmp(&other.limbs.len());
                let by_len = if negative { by_len.reverse() } else { by_len };
                by_len.then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
            }
        }
    }
}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInteger {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Canonical form makes equal values structurally identical.
        self.negative_fill == other.negative_fill && self.limbs == other.limbs
    }
}

impl Eq for BigInteger {}

impl hash::Hash for BigInteger {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.negative_fill, state);
        hash::Hash::hash(self.limbs.as_slice(), state);
    }
}

// INTEGER CONVERSIONS

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInteger::from_u128(n as u128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInteger::from_i128(n as i128)
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 u128 usize);
from_signed!(i8 i16 i32 i64 i128 isize);
