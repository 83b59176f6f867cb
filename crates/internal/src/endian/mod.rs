//! Endianness utility functions
//!
//! Each supported width maps onto the matching `byteorder` routines. The
//! runtime [`Endian`] selects between `BigEndian` and `LittleEndian`; signed
//! widths use the signed routines, which lay out the two's-complement bit
//! pattern unchanged.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dbytes_api::Endian;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer the codec can lay out as bytes
///
/// Implemented for `u16 i16 u32 i32 u64 i64`.
pub trait Word: sealed::Sealed + Copy + Default + PartialEq + core::fmt::Debug + 'static {
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const SIZE: usize;

    /// Fixed-size byte array holding one packed value
    type Bytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]> + core::fmt::Debug;

    /// Write `SIZE` bytes to the front of `dst`
    ///
    /// Panics if `dst` is shorter than `SIZE`.
    fn write(self, order: Endian, dst: &mut [u8]);

    /// Read `SIZE` bytes from the front of `src`
    ///
    /// Panics if `src` is shorter than `SIZE`.
    fn read(order: Endian, src: &[u8]) -> Self;

    /// Write every element of `values` to `dst`
    ///
    /// Panics unless `dst.len() == values.len() * SIZE`.
    fn write_run(values: &[Self], order: Endian, dst: &mut [u8]);

    /// Fill `values` from `src`
    ///
    /// Panics unless `src.len() == values.len() * SIZE`.
    fn read_run(order: Endian, src: &[u8], values: &mut [Self]);

    /// Pack into a new byte array
    #[inline]
    fn to_bytes(self, order: Endian) -> Self::Bytes {
        let mut bytes = Self::Bytes::default();
        self.write(order, bytes.as_mut());
        bytes
    }

    /// Unpack from a byte array
    #[inline]
    fn from_bytes(order: Endian, bytes: &Self::Bytes) -> Self {
        Self::read(order, bytes.as_ref())
    }
}

macro_rules! impl_word {
    ($($t:ty => $size:expr, $read:ident, $write:ident, $read_into:ident, $write_into:ident;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const BITS: u32 = $size * 8;
            const SIZE: usize = $size;
            type Bytes = [u8; $size];

            #[inline(always)]
            fn write(self, order: Endian, dst: &mut [u8]) {
                match order {
                    Endian::Big => BigEndian::$write(dst, self),
                    Endian::Little => LittleEndian::$write(dst, self),
                }
            }

            #[inline(always)]
            fn read(order: Endian, src: &[u8]) -> Self {
                match order {
                    Endian::Big => BigEndian::$read(src),
                    Endian::Little => LittleEndian::$read(src),
                }
            }

            #[inline]
            fn write_run(values: &[Self], order: Endian, dst: &mut [u8]) {
                match order {
                    Endian::Big => BigEndian::$write_into(values, dst),
                    Endian::Little => LittleEndian::$write_into(values, dst),
                }
            }

            #[inline]
            fn read_run(order: Endian, src: &[u8], values: &mut [Self]) {
                match order {
                    Endian::Big => BigEndian::$read_into(src, values),
                    Endian::Little => LittleEndian::$read_into(src, values),
                }
            }
        }
    )*};
}

impl_word! {
    u16 => 2, read_u16, write_u16, read_u16_into, write_u16_into;
    i16 => 2, read_i16, write_i16, read_i16_into, write_i16_into;
    u32 => 4, read_u32, write_u32, read_u32_into, write_u32_into;
    i32 => 4, read_i32, write_i32, read_i32_into, write_i32_into;
    u64 => 8, read_u64, write_u64, read_u64_into, write_u64_into;
    i64 => 8, read_i64, write_i64, read_i64_into, write_i64_into;
}
