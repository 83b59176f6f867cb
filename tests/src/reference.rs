//! Straightforward reference implementations to compare the codec against

use dbytes::codec::{self, Word};
use dbytes::Endian;

/// Pack `values` one scalar call at a time
pub fn pack_each<T: Word>(values: &[T], order: Endian) -> Vec<u8> {
    let mut out = vec![0u8; values.len() * T::SIZE];
    for (i, &value) in values.iter().enumerate() {
        codec::pack_into(value, order, &mut out, i * T::SIZE)
            .expect("reference buffer sized for every value");
    }
    out
}

/// Reverse a packed value, giving its layout in the opposite order
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
