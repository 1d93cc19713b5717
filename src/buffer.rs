//! Heap-resident limb buffer shared between copies of a [`LimbStore`].
//!
//! A `LimbBuffer` is only ever reached through an `Arc<LimbBuffer>` owned by
//! a [`LimbStore`]. The strong count of that `Arc` is the buffer's reference
//! count: cloning a store increments it, dropping a store decrements it, and
//! the allocation is released exactly once when it reaches zero.
//!
//! [`LimbStore`]: crate::LimbStore

use crate::lib::{ops, Arc, Vec};
use crate::math::Limb;

/// Growable sequence of limbs in little-endian order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LimbBuffer {
    data: Vec<Limb>,
}

impl LimbBuffer {
    /// Create a buffer holding `len` copies of `fill`.
    pub fn new(len: usize, fill: Limb) -> Self {
        let mut data = Vec::new();
        data.resize(len, fill);
        LimbBuffer { data }
    }

    /// Create a buffer holding a copy of `limbs`.
    pub fn from_slice(limbs: &[Limb]) -> Self {
        LimbBuffer {
            data: limbs.to_vec(),
        }
    }

    /// Number of limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no limbs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Grow to `len` limbs, filling new limbs with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is smaller than the current length.
    pub fn resize(&mut self, len: usize, fill: Limb) {
        assert!(len >= self.data.len(), "LimbBuffer::resize cannot shrink");
        // Vec only moves the old limbs once the new allocation succeeded, so a
        // failed reallocation leaves the buffer untouched.
        self.data.resize(len, fill);
    }

    /// Append a limb.
    #[inline]
    pub fn push(&mut self, limb: Limb) {
        self.data.push(limb);
    }

    /// Remove the last limb and return it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Limb> {
        self.data.pop()
    }

    /// The limbs, least significant first.
    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        &self.data
    }

    /// Mutable view of the limbs.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.data
    }

    /// Obtain exclusive access to the buffer behind `this`.
    ///
    /// If `this` is the only reference the buffer is returned as is.
    /// Otherwise the limbs are cloned into a fresh buffer which replaces
    /// `this`, and the reference to the shared original is released.
    #[inline]
    pub fn unshare(this: &mut Arc<LimbBuffer>) -> &mut LimbBuffer {
        Arc::make_mut(this)
    }
}

impl ops::Index<usize> for LimbBuffer {
    type Output = Limb;

    #[inline]
    fn index(&self, index: usize) -> &Limb {
        &self.data[index]
    }
}

impl ops::IndexMut<usize> for LimbBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Limb {
        &mut self.data[index]
    }
}
