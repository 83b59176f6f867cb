//! Byte orders as types
//!
//! `byteorder`'s [`BigEndian`] and [`LittleEndian`] markers fix the order at
//! compile time, so call sites read `BigEndian::pack(x)` instead of
//! threading an [`Endian`] argument through. [`Order`] adds the checked
//! codec operations to those markers.

pub use byteorder::{BigEndian, LittleEndian, NativeEndian, NetworkEndian};

use crate::{array, scalar};
use dbytes_api::{Endian, Result};
use dbytes_internal::Word;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::BigEndian {}
    impl Sealed for super::LittleEndian {}
}

/// Codec operations for a byte order known at compile time
pub trait Order: byteorder::ByteOrder + sealed::Sealed {
    /// The runtime order this type stands for
    const ENDIAN: Endian;

    /// See [`scalar::pack`]
    #[inline]
    fn pack<T: Word>(value: T) -> T::Bytes {
        scalar::pack(value, Self::ENDIAN)
    }

    /// See [`scalar::pack_to_vec`]
    #[cfg(feature = "alloc")]
    fn pack_to_vec<T: Word>(value: T) -> Vec<u8> {
        scalar::pack_to_vec(value, Self::ENDIAN)
    }

    /// See [`scalar::pack_into`]
    #[inline]
    fn pack_into<T: Word>(value: T, buffer: &mut [u8], offset: usize) -> Result<()> {
        scalar::pack_into(value, Self::ENDIAN, buffer, offset)
    }

    /// See [`scalar::pack_into_unchecked`]
    #[inline(always)]
    fn pack_into_unchecked<T: Word>(value: T, buffer: &mut [u8], offset: usize) {
        scalar::pack_into_unchecked(value, Self::ENDIAN, buffer, offset)
    }

    /// See [`scalar::unpack`]
    #[inline]
    fn unpack<T: Word>(buffer: &[u8], offset: usize) -> Result<T> {
        scalar::unpack(buffer, Self::ENDIAN, offset)
    }

    /// See [`scalar::unpack_unchecked`]
    #[inline(always)]
    fn unpack_unchecked<T: Word>(buffer: &[u8], offset: usize) -> T {
        scalar::unpack_unchecked(buffer, Self::ENDIAN, offset)
    }

    /// See [`array::pack_array`]
    fn pack_array<T: Word>(
        values: &[T],
        src_offset: usize,
        buffer: &mut [u8],
        dst_offset: usize,
        count: usize,
    ) -> Result<()> {
        array::pack_array(values, src_offset, buffer, dst_offset, count, Self::ENDIAN)
    }

    /// See [`array::unpack_array`]
    fn unpack_array<T: Word>(
        buffer: &[u8],
        src_offset: usize,
        values: &mut [T],
        dst_offset: usize,
        count: usize,
    ) -> Result<()> {
        array::unpack_array(buffer, src_offset, values, dst_offset, count, Self::ENDIAN)
    }

    /// See [`array::pack_slice`]
    #[cfg(feature = "alloc")]
    fn pack_slice<T: Word>(values: &[T]) -> Vec<u8> {
        array::pack_slice(values, Self::ENDIAN)
    }
}

impl Order for BigEndian {
    const ENDIAN: Endian = Endian::Big;
}

impl Order for LittleEndian {
    const ENDIAN: Endian = Endian::Little;
}
