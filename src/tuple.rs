//! Fixed-arity heterogeneous aggregates: pairs and tuples.
//!
//! A pair folds its two element digests directly. Wider tuples compute one
//! digest per position, collect them into a fixed array, and hand that array
//! to the ordered-sequence reduction, so the arity participates in the digest
//! through the length seed. The per-position digests themselves hash as plain
//! scalars in that second pass.

use crate::DeepHash;
use crate::combine::combine;
use crate::sequence::ordered_sequence_hash;

impl<A: DeepHash, B: DeepHash> DeepHash for (A, B) {
    fn deep_hash(&self) -> u64 {
        combine(self.0.deep_hash(), self.1.deep_hash())
    }
}

macro_rules! tuple_impl {
    ($($T:ident $idx:tt),+) => {
        impl<$($T: DeepHash),+> DeepHash for ($($T,)+) {
            fn deep_hash(&self) -> u64 {
                ordered_sequence_hash([$(self.$idx.deep_hash()),+])
            }
        }
    };
}

tuple_impl!(A 0);
tuple_impl!(A 0, B 1, C 2);
tuple_impl!(A 0, B 1, C 2, D 3);
tuple_impl!(A 0, B 1, C 2, D 3, E 4);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple_impl!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
