//! # limbint
//!
//! Arbitrary-precision signed integers stored in infinite two's complement
//! form over a sequence of 32-bit limbs.
//!
//! ```toml
//! [dependencies]
//! limbint = "0.1"
//! ```
//!
//! # Operating on big integers
//!
//! A [`BigInteger`] supports the full set of arithmetic, bitwise and shift
//! operators, with owned and borrowed operands and with primitive integers
//! on either side.
//!
//! ```
//! use limbint::BigInteger;
//!
//! let x: BigInteger = "1000000000000000000000000".parse().unwrap();
//! let y = &x * &x + 1u32;
//! assert_eq!(
//!     y.to_string(),
//!     "1000000000000000000000000000000000000000000000001",
//! );
//!
//! // Division truncates toward zero, the remainder takes the dividend's sign.
//! assert_eq!(BigInteger::from(-7) / 2i32, BigInteger::from(-3));
//! assert_eq!(BigInteger::from(-7) % 2i32, BigInteger::from(-1));
//!
//! // Bitwise operators act on the two's complement representation.
//! assert_eq!(BigInteger::from(-1) & BigInteger::from(0xFF), BigInteger::from(0xFF));
//! assert_eq!(BigInteger::from(-5) >> 1u32, BigInteger::from(-3));
//! ```
//!
//! # Fallible operations
//!
//! Parsing text and the `checked_*` division methods return a
//! [`Result`] carrying an [`Error`]. The `/` and `%` operators panic when the
//! divisor is zero.
//!
//! ```
//! use limbint::BigInteger;
//!
//! let err = "12x4".parse::<BigInteger>().unwrap_err();
//! assert_eq!(err.column(), 3);
//!
//! let err = BigInteger::from(1).checked_div(&BigInteger::zero()).unwrap_err();
//! assert!(err.is_division_by_zero());
//! ```
//!
//! # Storage
//!
//! Values of up to [`INLINE_LIMBS`] limbs live inside the [`LimbStore`]
//! without allocating. Longer values live in a reference counted
//! [`LimbBuffer`] that copies of the value share until one of them is
//! modified.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature:
//!
//! ```toml
//! [dependencies]
//! limbint = { version = "0.1", default-features = false }
//! ```

#![doc(html_root_url = "https://docs.rs/limbint/0.1.0")]
#![allow(
    // limb and wide casts are deliberate truncations
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::len_without_is_empty,
)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

mod lib {
    pub use core::cmp::Ordering;
    pub use core::{cmp, fmt, hash, iter, mem, ops, result, slice, str};

    pub use alloc::string::String;
    pub use alloc::sync::Arc;
    pub use alloc::vec::Vec;
    pub use alloc::boxed::Box;
}

#[doc(inline)]
pub use crate::buffer::LimbBuffer;
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::int::BigInteger;
#[doc(inline)]
pub use crate::math::Limb;
#[doc(inline)]
pub use crate::store::{LimbStore, INLINE_LIMBS};

pub mod buffer;
pub mod error;

mod de;
mod display;
mod div;
mod int;
mod math;
mod ops;
mod parse;
mod ser;
mod store;
