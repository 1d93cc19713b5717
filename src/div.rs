//! Truncating division of big integers.
//!
//! Quotients round toward zero and remainders take the sign of the dividend,
//! so `a == (a / b) * b + a % b` holds for every nonzero `b`. The magnitude
//! quotient picks the cheapest of three paths: a single-limb divisor, a
//! dividend that fits in `u128`, or schoolbook long division (Knuth, TAOCP
//! vol. 2, section 4.3.1, Algorithm D).

use crate::error::{Error, Result};
use crate::int::BigInteger;
use crate::lib::{cmp, Vec};
use crate::math::{join_u128, large, scalar, small, split_u128, Limb};
use crate::store::LimbStore;

impl BigInteger {
    /// Divide, truncating toward zero.
    ///
    /// Fails with [`ErrorCode::DivisionByZero`] if `rhs` is zero.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let q = BigInteger::from(-7).checked_div(&BigInteger::from(2)).unwrap();
    /// assert_eq!(q, BigInteger::from(-3));
    /// ```
    ///
    /// [`ErrorCode::DivisionByZero`]: crate::ErrorCode::DivisionByZero
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        if rhs.is_zero() {
            return Err(Error::division_by_zero());
        }
        Ok(quotient(self, rhs))
    }

    /// Remainder of truncating division, with the sign of `self`.
    ///
    /// Fails with [`ErrorCode::DivisionByZero`] if `rhs` is zero.
    ///
    /// [`ErrorCode::DivisionByZero`]: crate::ErrorCode::DivisionByZero
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Quotient and remainder of truncating division.
    ///
    /// ```
    /// use limbint::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(7).div_rem(&BigInteger::from(-2)).unwrap();
    /// assert_eq!((q, r), (BigInteger::from(-3), BigInteger::from(1)));
    /// ```
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        let q = self.checked_div(rhs)?;
        let mut r = q.clone();
        r.mul_in_place(rhs);
        r.negate();
        r.add_in_place(self);
        Ok((q, r))
    }

    /// DivAssign, panicking on a zero divisor.
    pub(crate) fn div_in_place(&mut self, rhs: &BigInteger) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        *self = quotient(self, rhs);
    }

    /// RemAssign, panicking on a zero divisor.
    pub(crate) fn rem_in_place(&mut self, rhs: &BigInteger) {
        assert!(
            !rhs.is_zero(),
            "attempt to calculate the remainder with a divisor of zero"
        );
        let mut q = quotient(self, rhs);
        q.mul_in_place(rhs);
        self.sub_in_place(&q);
    }
}

/// Signed quotient. The divisor must be nonzero.
fn quotient(lhs: &BigInteger, rhs: &BigInteger) -> BigInteger {
    let negative = lhs.is_negative() != rhs.is_negative();
    let u = lhs.magnitude();
    let v = rhs.magnitude();
    BigInteger::from_magnitude(div_magnitude(u.as_slice(), v.as_slice()), negative)
}

/// Quotient of normalized magnitudes, normalized. `v` must be nonzero.
fn div_magnitude(u: &[Limb], v: &[Limb]) -> LimbStore {
    match large::compare(u, v) {
        cmp::Ordering::Less => return LimbStore::from_slice(&[0]),
        cmp::Ordering::Equal => return LimbStore::from_slice(&[1]),
        cmp::Ordering::Greater => {}
    }

    if v.len() == 1 {
        let mut q = LimbStore::from_slice(u);
        small::div_rem(q.as_mut_slice(), v[0]);
        small::normalize(&mut q);
        q
    } else if u.len() <= 4 {
        let q = join_u128(u) / join_u128(v);
        let mut q = LimbStore::from_slice(&split_u128(q));
        small::normalize(&mut q);
        q
    } else {
        log::trace!("long division of {} limbs by {} limbs", u.len(), v.len());
        long_div(u, v)
    }
}

/// Schoolbook long division of `u` by `v`, where `u > v`, `v` has at least
/// two limbs and `u` at least as many.
fn long_div(u: &[Limb], v: &[Limb]) -> LimbStore {
    let n = v.len();
    let m = u.len() - n;

    // Normalize so the top limb of the divisor has its high bit set. The
    // dividend gets an extra limb to receive its shifted-out bits.
    let shift = v[n - 1].leading_zeros();
    let mut vn = v.to_vec();
    small::ishl_bits(&mut vn, shift);
    let mut un = Vec::with_capacity(u.len() + 1);
    un.extend_from_slice(u);
    un.push(0);
    let carry = small::ishl_bits(&mut un[..u.len()], shift);
    un[u.len()] = carry;

    let vtop = vn[n - 1];
    let vnext = vn[n - 2];
    let mut q = LimbStore::with_len(m + 1, 0);

    for j in (0..=m).rev() {
        let window = &mut un[j..=j + n];
        let mut qhat = estimate(window[n], window[n - 1], window[n - 2], vtop, vnext);

        // window -= qhat * vn
        let mut borrow = false;
        let mut carry: Limb = 0;
        for (wi, &vi) in window[..n].iter_mut().zip(&vn) {
            let (lo, hi) = scalar::mul(qhat, vi, carry);
            carry = hi;
            let (d, b) = scalar::sub(*wi, lo, borrow);
            *wi = d;
            borrow = b;
        }
        let (d, b) = scalar::sub(window[n], carry, borrow);
        window[n] = d;

        let mut negative = b;
        while negative {
            log::trace!("quotient digit {} overshot, adding back", j);
            qhat -= 1;
            negative = !add_back(window, &vn);
        }
        q[j] = qhat;
    }

    small::normalize(&mut q);
    q
}

/// Estimate a quotient limb from the top three limbs of the window and the
/// top two limbs of the normalized divisor.
///
/// The estimate is never too small, and the caller corrects it downward.
#[inline]
fn estimate(u2: Limb, u1: Limb, u0: Limb, vtop: Limb, vnext: Limb) -> Limb {
    if (u2, u1) == (vtop, vnext) {
        return Limb::MAX;
    }
    let num = join_u128(&[u0, u1, u2]);
    let den = join_u128(&[vnext, vtop]);
    cmp::min(num / den, Limb::MAX as u128) as Limb
}

/// Add `v` back into the `n + 1` limb window, returning true if the addition
/// carried out of the top limb, which makes the window non-negative again.
#[inline]
fn add_back(window: &mut [Limb], v: &[Limb]) -> bool {
    let n = v.len();
    let mut carry = false;
    for (wi, &vi) in window[..n].iter_mut().zip(v) {
        let (s, c) = scalar::add(*wi, vi, carry);
        *wi = s;
        carry = c;
    }
    let (s, c) = scalar::add(window[n], 0, carry);
    window[n] = s;
    c
}
