//! Runs of values
//!
//! Packing a run is defined as packing each element at successive
//! `SIZE`-byte offsets. The run routines of `byteorder` produce exactly
//! that layout, copying element memory when the requested order is the host
//! order and swapping each element otherwise.

use crate::endian::Word;
use dbytes_api::Endian;

/// Pack every element of `values` into `dst`
///
/// Panics unless `dst.len() == values.len() * T::SIZE`.
#[inline]
pub fn pack_run<T: Word>(values: &[T], dst: &mut [u8], order: Endian) {
    assert_eq!(dst.len(), values.len() * T::SIZE, "run length mismatch");
    T::write_run(values, order, dst);
}

/// Unpack `values.len()` elements from `src` into `values`
///
/// Panics unless `src.len() == values.len() * T::SIZE`.
#[inline]
pub fn unpack_run<T: Word>(src: &[u8], values: &mut [T], order: Endian) {
    assert_eq!(src.len(), values.len() * T::SIZE, "run length mismatch");
    T::read_run(order, src, values);
}
