//! Bulk pack and unpack of contiguous runs
//!
//! A run of `count` values is laid out exactly as `count` scalar packs at
//! successive `T::SIZE`-byte offsets. The checked functions validate every
//! argument once, up front, and then hand off to the unchecked functions.
//!
//! Validation order is fixed and the first failing check is reported:
//!
//! 1. `count` against the byte buffer, then against the element array
//! 2. the source offset: `InvalidRange` when it is at or past the end of its
//!    array, otherwise `InvalidArgumentCombination` when the run overflows
//! 3. the destination offset, in the same way
//!
//! The at-or-past-the-end check applies even when `count` is zero.

use dbytes_api::error::validate;
use dbytes_api::{Endian, Result};
use dbytes_internal::bulk;
use dbytes_internal::Word;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Check the `count` argument shared by both directions, returning the byte span
#[inline]
fn validate_count<T: Word>(count: usize, bytes_len: usize, values_len: usize) -> Result<usize> {
    let span = validate::span(count, T::SIZE)?;
    validate::at_most("count", count, bytes_len / T::SIZE)?;
    validate::at_most("count", count, values_len)?;
    Ok(span)
}

/// Pack `count` values from `values[src_offset..]` into `buffer[dst_offset..]`
pub fn pack_array<T: Word>(
    values: &[T],
    src_offset: usize,
    buffer: &mut [u8],
    dst_offset: usize,
    count: usize,
    order: Endian,
) -> Result<()> {
    let span = validate_count::<T>(count, buffer.len(), values.len())?;
    validate::start("src_offset", src_offset, values.len())?;
    validate::extent("src_offset", src_offset, count, values.len())?;
    validate::start("dst_offset", dst_offset, buffer.len())?;
    validate::extent("dst_offset", dst_offset, span, buffer.len())?;

    pack_array_unchecked(values, src_offset, buffer, dst_offset, count, order);
    Ok(())
}

/// Pack `count` values without validation
///
/// Panics if either range falls outside its slice.
#[inline]
pub fn pack_array_unchecked<T: Word>(
    values: &[T],
    src_offset: usize,
    buffer: &mut [u8],
    dst_offset: usize,
    count: usize,
    order: Endian,
) {
    let src = &values[src_offset..src_offset + count];
    let dst = &mut buffer[dst_offset..dst_offset + count * T::SIZE];
    bulk::pack_run(src, dst, order);
}

/// Unpack `count` values from `buffer[src_offset..]` into `values[dst_offset..]`
pub fn unpack_array<T: Word>(
    buffer: &[u8],
    src_offset: usize,
    values: &mut [T],
    dst_offset: usize,
    count: usize,
    order: Endian,
) -> Result<()> {
    let span = validate_count::<T>(count, buffer.len(), values.len())?;
    validate::start("src_offset", src_offset, buffer.len())?;
    validate::extent("src_offset", src_offset, span, buffer.len())?;
    validate::start("dst_offset", dst_offset, values.len())?;
    validate::extent("dst_offset", dst_offset, count, values.len())?;

    unpack_array_unchecked(buffer, src_offset, values, dst_offset, count, order);
    Ok(())
}

/// Unpack `count` values without validation
///
/// Panics if either range falls outside its slice.
#[inline]
pub fn unpack_array_unchecked<T: Word>(
    buffer: &[u8],
    src_offset: usize,
    values: &mut [T],
    dst_offset: usize,
    count: usize,
    order: Endian,
) {
    let src = &buffer[src_offset..src_offset + count * T::SIZE];
    let dst = &mut values[dst_offset..dst_offset + count];
    bulk::unpack_run(src, dst, order);
}

/// Pack a whole slice into a newly allocated buffer
#[cfg(feature = "alloc")]
pub fn pack_slice<T: Word>(values: &[T], order: Endian) -> Vec<u8> {
    let mut buffer = alloc::vec![0u8; values.len() * T::SIZE];
    bulk::pack_run(values, &mut buffer, order);
    buffer
}
