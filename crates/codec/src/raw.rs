//! Pointer-level entry points
//!
//! For callers that hold `(pointer, length)` pairs rather than slices, such
//! as FFI boundaries. Pointers are checked for null and signed offsets and
//! counts for negativity; everything else is delegated to the slice-based
//! checked functions, so error selection is identical.
//!
//! Arguments are validated in parameter order: every pointer first, then
//! `count`, then the offsets.

use core::slice;

use dbytes_api::error::validate;
use dbytes_api::{Endian, Result};
use dbytes_internal::Word;

use crate::{array, scalar};

/// Write `value` into the `len`-byte buffer at `buffer`, at `offset`
///
/// # Safety
///
/// If `buffer` is non-null it must be valid for writes of `len` bytes and
/// not aliased for the duration of the call.
pub unsafe fn pack_into<T: Word>(
    value: T,
    order: Endian,
    buffer: *mut u8,
    len: usize,
    offset: isize,
) -> Result<()> {
    validate::non_null(buffer.cast_const(), "buffer")?;
    let offset = validate::non_negative(offset, "offset")?;
    let buffer = unsafe { slice::from_raw_parts_mut(buffer, len) };
    scalar::pack_into(value, order, buffer, offset)
}

/// Read a value from the `len`-byte buffer at `buffer`, at `offset`
///
/// # Safety
///
/// If `buffer` is non-null it must be valid for reads of `len` bytes.
pub unsafe fn unpack<T: Word>(
    buffer: *const u8,
    len: usize,
    order: Endian,
    offset: isize,
) -> Result<T> {
    validate::non_null(buffer, "buffer")?;
    let offset = validate::non_negative(offset, "offset")?;
    let buffer = unsafe { slice::from_raw_parts(buffer, len) };
    scalar::unpack(buffer, order, offset)
}

/// Pack `count` values from the `values_len`-element array at `values`
///
/// # Safety
///
/// Non-null pointers must be valid and properly aligned for their lengths,
/// and the two regions must not overlap.
#[allow(clippy::too_many_arguments)]
pub unsafe fn pack_array<T: Word>(
    values: *const T,
    values_len: usize,
    src_offset: isize,
    buffer: *mut u8,
    buffer_len: usize,
    dst_offset: isize,
    count: isize,
    order: Endian,
) -> Result<()> {
    validate::non_null(values, "values")?;
    validate::non_null(buffer.cast_const(), "buffer")?;
    let count = validate::non_negative(count, "count")?;
    let src_offset = validate::non_negative(src_offset, "src_offset")?;
    let dst_offset = validate::non_negative(dst_offset, "dst_offset")?;

    let values = unsafe { slice::from_raw_parts(values, values_len) };
    let buffer = unsafe { slice::from_raw_parts_mut(buffer, buffer_len) };
    array::pack_array(values, src_offset, buffer, dst_offset, count, order)
}

/// Unpack `count` values into the `values_len`-element array at `values`
///
/// # Safety
///
/// Non-null pointers must be valid and properly aligned for their lengths,
/// and the two regions must not overlap.
#[allow(clippy::too_many_arguments)]
pub unsafe fn unpack_array<T: Word>(
    buffer: *const u8,
    buffer_len: usize,
    src_offset: isize,
    values: *mut T,
    values_len: usize,
    dst_offset: isize,
    count: isize,
    order: Endian,
) -> Result<()> {
    validate::non_null(buffer, "buffer")?;
    validate::non_null(values.cast_const(), "values")?;
    let count = validate::non_negative(count, "count")?;
    let src_offset = validate::non_negative(src_offset, "src_offset")?;
    let dst_offset = validate::non_negative(dst_offset, "dst_offset")?;

    let buffer = unsafe { slice::from_raw_parts(buffer, buffer_len) };
    let values = unsafe { slice::from_raw_parts_mut(values, values_len) };
    array::unpack_array(buffer, src_offset, values, dst_offset, count, order)
}
