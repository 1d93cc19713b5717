//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the limb buffers, so for
//! `[0, 1, 2, 3]`, `3` is the most significant limb and `0` is the least
//! significant limb. Everything in this module works on unsigned magnitudes;
//! signs are handled by the caller.

use crate::lib::{cmp, mem};
use crate::store::LimbStore;

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores a full 32-bit
/// word.
pub type Limb = u32;

/// Type wide enough to hold the product of two limbs plus two carries.
pub(crate) type Wide = u64;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Cast to limb type, keeping the low bits.
#[inline(always)]
pub(crate) fn as_limb(x: Wide) -> Limb {
    x as Limb
}

/// Cast to wide type.
#[inline(always)]
pub(crate) fn as_wide(x: Limb) -> Wide {
    x as Wide
}

// POWERS
// ------

/// Powers of ten that fit in a limb, `POW10[i] == 10^i`.
pub(crate) const POW10: [Limb; 10] = [
    1,
    10,
    100,
    1000,
    10000,
    100000,
    1000000,
    10000000,
    100000000,
    1000000000,
];

/// Number of decimal digits processed per limb-sized chunk.
pub(crate) const POW10_DIGITS: usize = POW10.len() - 1;

// SPLIT
// -----

/// Split u128 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u128(x: u128) -> [Limb; 4] {
    [
        x as Limb,
        (x >> 32) as Limb,
        (x >> 64) as Limb,
        (x >> 96) as Limb,
    ]
}

/// Join up to four little-endian limbs into a u128.
#[inline]
pub(crate) fn join_u128(x: &[Limb]) -> u128 {
    debug_assert!(x.len() <= 4);
    x.iter()
        .rev()
        .fold(0, |acc, &xi| (acc << LIMB_BITS) | xi as u128)
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry, returning the sum and the
    /// outgoing carry.
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: bool) -> (Limb, bool) {
        let (v, c1) = x.overflowing_add(y);
        let (v, c2) = v.overflowing_add(carry as Limb);
        (v, c1 | c2)
    }

    // SUBTRACTION

    /// Subtract `y` and an incoming borrow from `x`, returning the
    /// difference and the outgoing borrow.
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: bool) -> (Limb, bool) {
        let (v, b1) = x.overflowing_sub(y);
        let (v, b2) = v.overflowing_sub(borrow as Limb);
        (v, b1 | b2)
    }

    // MULTIPLICATION

    /// Multiply two limbs and add a carry.
    ///
    /// Returns the (low, high) components. Cannot overflow, since
    /// `Wide::MAX - Limb::MAX * Limb::MAX >= 2 * Limb::MAX`.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z = as_wide(x) * as_wide(y) + as_wide(carry);
        (as_limb(z), as_limb(z >> LIMB_BITS))
    }

    /// MulAssign with carry, returning the high component.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }

    // DIVISION

    /// Divide the two-limb value `hi:lo` by `d`.
    ///
    /// Requires `hi < d` so the quotient fits in a limb. Returns the
    /// (quotient, remainder).
    #[inline]
    pub fn div(hi: Limb, lo: Limb, d: Limb) -> (Limb, Limb) {
        debug_assert!(hi < d);
        let n = (as_wide(hi) << LIMB_BITS) | as_wide(lo);
        let d = as_wide(d);
        (as_limb(n / d), as_limb(n % d))
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    /// Multiply by a limb and add a limb: `x = x * y + addend`.
    ///
    /// The final carry is appended, so the buffer grows by at most one limb.
    pub fn imul_add(x: &mut LimbStore, y: Limb, addend: Limb) {
        let mut carry = addend;
        for xi in x.as_mut_slice() {
            carry = scalar::imul(xi, y, carry);
        }
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Divide in place by a single limb, returning the remainder.
    ///
    /// Processes limbs from the most significant down, carrying the running
    /// remainder into the next limb. Leading zero limbs are left for the
    /// caller to normalize.
    pub fn div_rem(x: &mut [Limb], d: Limb) -> Limb {
        assert!(d != 0, "division by zero limb");
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = scalar::div(rem, *xi, d);
            *xi = q;
            rem = r;
        }
        rem
    }

    /// Normalize the magnitude by popping leading zero limbs.
    ///
    /// Zero keeps a single limb.
    #[inline]
    pub fn normalize(x: &mut LimbStore) {
        while x.len() > 1 && x.last() == Some(0) {
            x.pop();
        }
    }

    /// Shift-left bits inside a buffer, returning the bits shifted out of
    /// the top limb.
    ///
    /// Assumes `n < LIMB_BITS`.
    #[inline]
    pub fn ishl_bits(x: &mut [Limb], n: u32) -> Limb {
        debug_assert!((n as usize) < LIMB_BITS);
        if n == 0 {
            return 0;
        }

        // For each limb, shift left by n and add the bits shifted out of the
        // limb below. For example, for u8 limbs shifted left 2:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS as u32 - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi = (tmp << n) | (prev >> rshift);
            prev = tmp;
        }
        prev >> rshift
    }

    /// Shift-right bits inside a buffer, shifting `high` in from the top.
    ///
    /// Assumes `n < LIMB_BITS`.
    #[inline]
    pub fn ishr_bits(x: &mut [Limb], n: u32, high: Limb) {
        debug_assert!((n as usize) < LIMB_BITS);
        if n == 0 {
            return;
        }

        let lshift = LIMB_BITS as u32 - n;
        let mut prev = high;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi = (tmp >> n) | (prev << lshift);
            prev = tmp;
        }
    }
}

// LARGE
// -----

// Large-to-large operations on normalized magnitudes.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both must be normalized, so a longer buffer is a larger value.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// Works in O(n*m) time: each of the `m` limbs of `y` multiplies all `n`
    /// limbs of `x`, accumulating into a single `n + m` limb buffer.
    pub fn mul(x: &[Limb], y: &[Limb]) -> LimbStore {
        let mut z = LimbStore::with_len(x.len() + y.len(), 0);
        {
            let zs = z.as_mut_slice();
            for (i, &xi) in x.iter().enumerate() {
                let mut carry: Limb = 0;
                for (j, &yj) in y.iter().enumerate() {
                    // zs[i+j] + xi*yj + carry <= Wide::MAX, see scalar::mul.
                    let t = as_wide(zs[i + j]) + as_wide(xi) * as_wide(yj) + as_wide(carry);
                    zs[i + j] = as_limb(t);
                    carry = as_limb(t >> LIMB_BITS);
                }
                zs[i + y.len()] = carry;
            }
        }
        small::normalize(&mut z);
        z
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn store(x: &[Limb]) -> LimbStore {
        LimbStore::from_slice(x)
    }

    #[test]
    fn split_join_test() {
        let x = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
        assert_eq!(
            split_u128(x),
            [0x7654_3210, 0xFEDC_BA98, 0x89AB_CDEF, 0x0123_4567]
        );
        assert_eq!(join_u128(&split_u128(x)), x);
        assert_eq!(join_u128(&[5]), 5);
        assert_eq!(join_u128(&[]), 0);
    }

    #[test]
    fn scalar_test() {
        assert_eq!(scalar::add(Limb::MAX, 1, false), (0, true));
        assert_eq!(scalar::add(Limb::MAX, 0, true), (0, true));
        assert_eq!(scalar::add(Limb::MAX, Limb::MAX, true), (Limb::MAX, true));
        assert_eq!(scalar::sub(0, 0, true), (Limb::MAX, true));
        assert_eq!(scalar::sub(5, 3, true), (1, false));
        assert_eq!(scalar::mul(Limb::MAX, Limb::MAX, Limb::MAX), (0, Limb::MAX));
        assert_eq!(scalar::div(1, 0, 2), (0x8000_0000, 0));
        assert_eq!(scalar::div(4, 5, 7), (0x9249_2493, 0));
    }

    #[test]
    fn compare_test() {
        // Simple
        assert_eq!(large::compare(&[1], &[2]), cmp::Ordering::Less);
        assert_eq!(large::compare(&[2], &[2]), cmp::Ordering::Equal);

        // Check asymmetric
        assert_eq!(large::compare(&[5, 1], &[2]), cmp::Ordering::Greater);

        // Check when we use reverse ordering properly.
        assert_eq!(large::compare(&[5, 1, 9], &[6, 2, 8]), cmp::Ordering::Greater);

        // Complex scenario, check it properly uses reverse ordering.
        assert_eq!(
            large::compare(&[0, 1, 9], &[4294967295, 0, 9]),
            cmp::Ordering::Greater
        );
    }

    #[test]
    fn imul_add_test() {
        // No overflow check, 1-int.
        let mut x = store(&[5]);
        small::imul_add(&mut x, 7, 0);
        assert_eq!(x.as_slice(), &[35]);

        // Overflow, 1 carry.
        let mut x = store(&[0x33333334]);
        small::imul_add(&mut x, 5, 0);
        assert_eq!(x.as_slice(), &[4, 1]);

        // Overflow, 2 carries.
        let mut x = store(&[0x33333334, 0x33333333]);
        small::imul_add(&mut x, 5, 0);
        assert_eq!(x.as_slice(), &[4, 0, 1]);

        // Addend ripples through the product.
        let mut x = store(&[4294967295]);
        small::imul_add(&mut x, 1, 5);
        assert_eq!(x.as_slice(), &[4, 1]);

        let mut x = store(&[0]);
        small::imul_add(&mut x, 10, 9);
        assert_eq!(x.as_slice(), &[9]);
    }

    #[test]
    fn div_rem_test() {
        let mut x = [0, 1];
        assert_eq!(small::div_rem(&mut x, 2), 0);
        assert_eq!(x, [0x8000_0000, 0]);

        let mut x = [0x0000_0007, 0x0000_0000, 0x0000_0003];
        assert_eq!(small::div_rem(&mut x, 10), 5);
        // (3 << 64 | 7) / 10
        assert_eq!(join_u128(&x), ((3u128 << 64) | 7) / 10);
    }

    #[test]
    fn shift_bits_test() {
        let mut x = [0xD2210408, 0xB];
        assert_eq!(small::ishl_bits(&mut x, 5), 0);
        assert_eq!(x, [0x44208100, 0x17A]);

        let mut x = [0, 0x8000_0001];
        assert_eq!(small::ishl_bits(&mut x, 1), 1);
        assert_eq!(x, [0, 2]);

        let mut x = [0x44208100, 0x17A];
        small::ishr_bits(&mut x, 5, 0);
        assert_eq!(x, [0xD2210408, 0xB]);

        let mut x = [0, 0];
        small::ishr_bits(&mut x, 4, Limb::MAX);
        assert_eq!(x, [0, 0xF000_0000]);
    }

    #[test]
    fn mul_test() {
        let z = large::mul(&[Limb::MAX, Limb::MAX], &[Limb::MAX]);
        assert_eq!(z.as_slice(), &[1, Limb::MAX, Limb::MAX - 1]);

        let z = large::mul(&[0], &[1, 2, 3]);
        assert_eq!(z.as_slice(), &[0]);

        let z = large::mul(&[1000000007], &[1000000009]);
        assert_eq!(z.as_slice(), &[0x6110_A03F, 0x0DE0_B6B7]);
    }
}
