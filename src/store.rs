//! Value-semantics limb container with inline storage and copy-on-write.
//!
//! Short sequences live directly inside the `LimbStore`, so the common small
//! integers never touch the allocator. Longer sequences live in a
//! [`LimbBuffer`] behind an `Arc`, so cloning a large value only bumps a
//! reference count. Every mutable access to heap storage first makes the
//! buffer unique, which means writing through one copy is never visible
//! through another.
//!
//! Storage only ever moves from inline to heap. A heap-backed store that is
//! shrunk below the inline capacity keeps its buffer.

use crate::buffer::LimbBuffer;
use crate::lib::{fmt, iter, mem, ops, slice, Arc};
use crate::math::Limb;

/// Number of limbs stored without allocating: as many as fit in a pointer.
pub const INLINE_LIMBS: usize = {
    let n = mem::size_of::<usize>() / mem::size_of::<Limb>();
    if n == 0 {
        1
    } else {
        n
    }
};

#[derive(Clone)]
enum Repr {
    Inline {
        len: usize,
        data: [Limb; INLINE_LIMBS],
    },
    Heap(Arc<LimbBuffer>),
}

/// Little-endian sequence of limbs.
///
/// ```
/// use limbint::LimbStore;
///
/// let mut a = LimbStore::with_len(8, 1);
/// let b = a.clone();
/// assert!(a.shares_storage_with(&b));
///
/// a[0] = 2;
/// assert!(!a.shares_storage_with(&b));
/// assert_eq!(b[0], 1);
/// ```
#[derive(Clone)]
pub struct LimbStore {
    repr: Repr,
}

impl LimbStore {
    /// Create an empty store. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        LimbStore {
            repr: Repr::Inline {
                len: 0,
                data: [0; INLINE_LIMBS],
            },
        }
    }

    /// Create a store holding `len` copies of `fill`.
    pub fn with_len(len: usize, fill: Limb) -> Self {
        let mut store = LimbStore::new();
        store.resize(len, fill);
        store
    }

    /// Create a store holding a copy of `limbs`.
    pub fn from_slice(limbs: &[Limb]) -> Self {
        if limbs.len() <= INLINE_LIMBS {
            let mut data = [0; INLINE_LIMBS];
            data[..limbs.len()].copy_from_slice(limbs);
            LimbStore {
                repr: Repr::Inline {
                    len: limbs.len(),
                    data,
                },
            }
        } else {
            LimbStore {
                repr: Repr::Heap(Arc::new(LimbBuffer::from_slice(limbs))),
            }
        }
    }

    /// Number of stored limbs.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Heap(buffer) => buffer.len(),
        }
    }

    /// Returns true if no limbs are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the limbs are stored without a heap allocation.
    #[inline]
    pub fn is_inline(&self) -> bool {
        match self.repr {
            Repr::Inline { .. } => true,
            Repr::Heap(_) => false,
        }
    }

    /// Returns true if both stores currently read from the same heap buffer.
    pub fn shares_storage_with(&self, other: &LimbStore) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Heap(a), Repr::Heap(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Grow to `len` limbs, filling new limbs with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is smaller than the current length. Use [`pop`] to
    /// shrink.
    ///
    /// [`pop`]: LimbStore::pop
    pub fn resize(&mut self, new_len: usize, fill: Limb) {
        assert!(
            new_len >= self.len(),
            "LimbStore::resize cannot shrink from {} to {}",
            self.len(),
            new_len,
        );
        match &mut self.repr {
            Repr::Inline { len, data } if new_len <= INLINE_LIMBS => {
                for limb in &mut data[*len..new_len] {
                    *limb = fill;
                }
                *len = new_len;
            }
            Repr::Inline { .. } => {
                self.promote(new_len).resize(new_len, fill);
            }
            Repr::Heap(buffer) => {
                LimbBuffer::unshare(buffer).resize(new_len, fill);
            }
        }
    }

    /// Append a limb.
    pub fn push(&mut self, limb: Limb) {
        match &mut self.repr {
            Repr::Inline { len, data } if *len < INLINE_LIMBS => {
                data[*len] = limb;
                *len += 1;
            }
            Repr::Inline { len, .. } => {
                let capacity = *len + 1;
                self.promote(capacity).push(limb);
            }
            Repr::Heap(buffer) => LimbBuffer::unshare(buffer).push(limb),
        }
    }

    /// Remove the last limb and return it, or `None` if empty.
    pub fn pop(&mut self) -> Option<Limb> {
        match &mut self.repr {
            Repr::Inline { len, data } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(data[*len])
                }
            }
            Repr::Heap(buffer) => LimbBuffer::unshare(buffer).pop(),
        }
    }

    /// Last limb, if any.
    #[inline]
    pub fn last(&self) -> Option<Limb> {
        self.as_slice().last().copied()
    }

    /// The limbs, least significant first.
    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        match &self.repr {
            Repr::Inline { len, data } => &data[..*len],
            Repr::Heap(buffer) => buffer.as_slice(),
        }
    }

    /// Mutable view of the limbs. Clones a shared heap buffer first.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        match &mut self.repr {
            Repr::Inline { len, data } => &mut data[..*len],
            Repr::Heap(buffer) => LimbBuffer::unshare(buffer).as_mut_slice(),
        }
    }

    /// Iterate over the limbs, least significant first.
    #[inline]
    pub fn iter(&self) -> slice::Iter<Limb> {
        self.as_slice().iter()
    }

    /// Move inline limbs into a fresh heap buffer and return it.
    #[cold]
    fn promote(&mut self, capacity: usize) -> &mut LimbBuffer {
        let buffer = LimbBuffer::from_slice(self.as_slice());
        log::trace!(
            "limb store moved to the heap: {} limbs, growing to {}",
            buffer.len(),
            capacity,
        );
        self.repr = Repr::Heap(Arc::new(buffer));
        match &mut self.repr {
            Repr::Heap(buffer) => LimbBuffer::unshare(buffer),
            Repr::Inline { .. } => unreachable!(),
        }
    }
}

impl Default for LimbStore {
    #[inline]
    fn default() -> Self {
        LimbStore::new()
    }
}

impl ops::Index<usize> for LimbStore {
    type Output = Limb;

    #[inline]
    fn index(&self, index: usize) -> &Limb {
        &self.as_slice()[index]
    }
}

impl ops::IndexMut<usize> for LimbStore {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Limb {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for LimbStore {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for LimbStore {}

impl fmt::Debug for LimbStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("LimbStore")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a LimbStore {
    type Item = &'a Limb;
    type IntoIter = slice::Iter<'a, Limb>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl iter::FromIterator<Limb> for LimbStore {
    fn from_iter<I: IntoIterator<Item = Limb>>(iter: I) -> Self {
        let mut store = LimbStore::new();
        for limb in iter {
            store.push(limb);
        }
        store
    }
}

impl From<&[Limb]> for LimbStore {
    #[inline]
    fn from(limbs: &[Limb]) -> Self {
        LimbStore::from_slice(limbs)
    }
}
