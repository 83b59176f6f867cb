//! Single-value pack and unpack

use dbytes_api::error::validate;
use dbytes_api::{Endian, Result};
use dbytes_internal::Word;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Pack `value` into a new `T::SIZE`-byte array
#[inline]
pub fn pack<T: Word>(value: T, order: Endian) -> T::Bytes {
    value.to_bytes(order)
}

/// Pack `value` into a newly allocated buffer of exactly `T::SIZE` bytes
#[cfg(feature = "alloc")]
pub fn pack_to_vec<T: Word>(value: T, order: Endian) -> Vec<u8> {
    pack(value, order).as_ref().to_vec()
}

/// Write `value` into `buffer` at `offset`
///
/// Fails with `InvalidRange` naming `offset` if `T::SIZE` bytes starting at
/// `offset` do not fit in `buffer`. Nothing is written on failure.
#[inline]
pub fn pack_into<T: Word>(value: T, order: Endian, buffer: &mut [u8], offset: usize) -> Result<()> {
    validate::offset("offset", offset, T::SIZE, buffer.len())?;
    pack_into_unchecked(value, order, buffer, offset);
    Ok(())
}

/// Write `value` into `buffer` at `offset` without validation
///
/// The caller guarantees `offset + T::SIZE <= buffer.len()`; otherwise this
/// panics.
#[inline(always)]
pub fn pack_into_unchecked<T: Word>(value: T, order: Endian, buffer: &mut [u8], offset: usize) {
    value.write(order, &mut buffer[offset..]);
}

/// Read a value from `buffer` at `offset`
///
/// Fails with `InvalidRange` naming `offset` if `T::SIZE` bytes starting at
/// `offset` are not inside `buffer`.
#[inline]
pub fn unpack<T: Word>(buffer: &[u8], order: Endian, offset: usize) -> Result<T> {
    validate::offset("offset", offset, T::SIZE, buffer.len())?;
    Ok(unpack_unchecked(buffer, order, offset))
}

/// Read a value from `buffer` at `offset` without validation
///
/// The caller guarantees `offset + T::SIZE <= buffer.len()`; otherwise this
/// panics.
#[inline(always)]
pub fn unpack_unchecked<T: Word>(buffer: &[u8], order: Endian, offset: usize) -> T {
    T::read(order, &buffer[offset..])
}
