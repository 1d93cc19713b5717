use crate::int::BigInteger;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInteger {
    /// Serialize as a decimal string, which every format can carry without
    /// losing precision.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
