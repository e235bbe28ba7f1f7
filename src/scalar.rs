//! Scalar digests: opaque values with no substructure to reduce.
//!
//! Every impl here delegates to the baseline hash, [`hash_one`]. Consistency
//! holds because `Hash` for these types is already consistent with `Eq`.

use crate::DeepHash;
use crate::combine::hash_one;

macro_rules! scalar_impl {
    ($($ty:ty),+ $(,)?) => {$(
        impl DeepHash for $ty {
            fn deep_hash(&self) -> u64 {
                hash_one(self)
            }
        }
    )+};
}

scalar_impl!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String,
);

impl<T: DeepHash + ?Sized> DeepHash for &T {
    fn deep_hash(&self) -> u64 {
        (**self).deep_hash()
    }
}

impl<T: DeepHash + ?Sized> DeepHash for Box<T> {
    fn deep_hash(&self) -> u64 {
        (**self).deep_hash()
    }
}
