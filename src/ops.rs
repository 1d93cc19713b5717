//! Operator overloads for [`BigInteger`].
//!
//! Every binary operator accepts owned and borrowed operands. Owned left
//! operands are updated in place, borrowed ones are cloned first. The
//! arithmetic operators also accept a primitive integer on either side.

use crate::int::BigInteger;
use crate::lib::{iter, ops};

macro_rules! impl_binop {
    ($imp:ident $method:ident, $assign_imp:ident $assign_method:ident, $in_place:ident) => {
        impl ops::$assign_imp<&BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: &BigInteger) {
                self.$in_place(rhs);
            }
        }

        impl ops::$assign_imp<BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInteger) {
                self.$in_place(&rhs);
            }
        }

        impl ops::$imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(mut self, rhs: &BigInteger) -> BigInteger {
                self.$in_place(rhs);
                self
            }
        }

        impl ops::$imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(mut self, rhs: BigInteger) -> BigInteger {
                self.$in_place(&rhs);
                self
            }
        }

        impl ops::$imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                let mut x = self.clone();
                x.$in_place(rhs);
                x
            }
        }

        impl ops::$imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                let mut x = self.clone();
                x.$in_place(&rhs);
                x
            }
        }
    };
}

impl_binop!(Add add, AddAssign add_assign, add_in_place);
impl_binop!(Sub sub, SubAssign sub_assign, sub_in_place);
impl_binop!(Mul mul, MulAssign mul_assign, mul_in_place);
impl_binop!(Div div, DivAssign div_assign, div_in_place);
impl_binop!(Rem rem, RemAssign rem_assign, rem_in_place);
impl_binop!(BitAnd bitand, BitAndAssign bitand_assign, and_in_place);
impl_binop!(BitOr bitor, BitOrAssign bitor_assign, or_in_place);
impl_binop!(BitXor bitxor, BitXorAssign bitxor_assign, xor_in_place);

// PRIMITIVE OPERANDS

macro_rules! impl_primitive_binop {
    ($imp:ident $method:ident, $assign_imp:ident $assign_method:ident, $in_place:ident; $($ty:ident)*) => {
        $(
            impl ops::$assign_imp<$ty> for BigInteger {
                #[inline]
                fn $assign_method(&mut self, rhs: $ty) {
                    self.$in_place(&BigInteger::from(rhs));
                }
            }

            impl ops::$imp<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(mut self, rhs: $ty) -> BigInteger {
                    self.$in_place(&BigInteger::from(rhs));
                    self
                }
            }

            impl ops::$imp<$ty> for &BigInteger {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: $ty) -> BigInteger {
                    let mut x = self.clone();
                    x.$in_place(&BigInteger::from(rhs));
                    x
                }
            }

            impl ops::$imp<BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: BigInteger) -> BigInteger {
                    let mut x = BigInteger::from(self);
                    x.$in_place(&rhs);
                    x
                }
            }

            impl ops::$imp<&BigInteger> for $ty {
                type Output = BigInteger;

                #[inline]
                fn $method(self, rhs: &BigInteger) -> BigInteger {
                    let mut x = BigInteger::from(self);
                    x.$in_place(rhs);
                    x
                }
            }
        )*
    };
}

macro_rules! impl_primitive_arith {
    ($($ty:ident)*) => {
        impl_primitive_binop!(Add add, AddAssign add_assign, add_in_place; $($ty)*);
        impl_primitive_binop!(Sub sub, SubAssign sub_assign, sub_in_place; $($ty)*);
        impl_primitive_binop!(Mul mul, MulAssign mul_assign, mul_in_place; $($ty)*);
        impl_primitive_binop!(Div div, DivAssign div_assign, div_in_place; $($ty)*);
        impl_primitive_binop!(Rem rem, RemAssign rem_assign, rem_in_place; $($ty)*);
    };
}

impl_primitive_arith!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

// SHIFTS

/// Shift by a signed amount. Negative amounts shift the other way.
fn shift(x: &mut BigInteger, amount: i128, left: bool) {
    let n = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
    if (amount >= 0) == left {
        x.shl_in_place(n);
    } else {
        x.shr_in_place(n);
    }
}

macro_rules! impl_shift {
    ($($ty:ident)*) => {
        $(
            impl ops::ShlAssign<$ty> for BigInteger {
                #[inline]
                fn shl_assign(&mut self, rhs: $ty) {
                    shift(self, rhs as i128, true);
                }
            }

            impl ops::ShrAssign<$ty> for BigInteger {
                #[inline]
                fn shr_assign(&mut self, rhs: $ty) {
                    shift(self, rhs as i128, false);
                }
            }

            impl ops::Shl<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn shl(mut self, rhs: $ty) -> BigInteger {
                    self <<= rhs;
                    self
                }
            }

            impl ops::Shr<$ty> for BigInteger {
                type Output = BigInteger;

                #[inline]
                fn shr(mut self, rhs: $ty) -> BigInteger {
                    self >>= rhs;
                    self
                }
            }

            impl ops::Shl<$ty> for &BigInteger {
                type Output = BigInteger;

                #[inline]
                fn shl(self, rhs: $ty) -> BigInteger {
                    self.clone() << rhs
                }
            }

            impl ops::Shr<$ty> for &BigInteger {
                type Output = BigInteger;

                #[inline]
                fn shr(self, rhs: $ty) -> BigInteger {
                    self.clone() >> rhs
                }
            }
        )*
    };
}

impl_shift!(i32 i64 isize u32 u64 usize);

// UNARY

impl ops::Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl ops::Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl ops::Not for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn not(mut self) -> BigInteger {
        self.not_in_place();
        self
    }
}

impl ops::Not for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn not(self) -> BigInteger {
        !self.clone()
    }
}

// FOLDS

impl iter::Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl<'a> iter::Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| acc + x)
    }
}

impl iter::Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}

impl<'a> iter::Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| acc * x)
    }
}
