//! Left and right rotation

use dbytes_api::error::validate;
use dbytes_api::Result;

mod sealed {
    pub trait Sealed {}
}

/// An integer that can be rotated
///
/// Implemented for `u8 i8 u16 i16 u32 i32 u64 i64`. Signed values rotate
/// their two's-complement bit pattern.
pub trait Rotate: sealed::Sealed + Copy {
    /// Width in bits
    const BITS: u32;

    /// Rotate left by `distance`, which must not exceed `BITS`
    fn rotate_left_checked(self, distance: u32) -> Result<Self> {
        validate::at_most("distance", distance as usize, Self::BITS as usize)?;
        Ok(self.rotl(distance))
    }

    /// Rotate right by `distance`, which must not exceed `BITS`
    fn rotate_right_checked(self, distance: u32) -> Result<Self> {
        validate::at_most("distance", distance as usize, Self::BITS as usize)?;
        Ok(self.rotr(distance))
    }

    /// Rotate left by `distance % BITS`
    fn rotl(self, distance: u32) -> Self;

    /// Rotate right by `distance % BITS`
    fn rotr(self, distance: u32) -> Self;
}

macro_rules! impl_rotate {
    ($($t:ty => $u:ty;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Rotate for $t {
            const BITS: u32 = (core::mem::size_of::<$u>() * 8) as u32;

            #[inline(always)]
            fn rotl(self, distance: u32) -> Self {
                let d = distance % Self::BITS;
                if d == 0 {
                    return self;
                }
                (self as $u).rotate_left(d) as $t
            }

            #[inline(always)]
            fn rotr(self, distance: u32) -> Self {
                let d = distance % Self::BITS;
                if d == 0 {
                    return self;
                }
                (self as $u).rotate_right(d) as $t
            }
        }
    )*};
}

impl_rotate! {
    u8 => u8;
    i8 => u8;
    u16 => u16;
    i16 => u16;
    u32 => u32;
    i32 => u32;
    u64 => u64;
    i64 => u64;
}

/// Rotate `value` left by `distance` bits, `0 <= distance <= BITS`
///
/// Fails with `InvalidRange` naming `distance` otherwise.
#[inline]
pub fn rotate_left<T: Rotate>(value: T, distance: u32) -> Result<T> {
    value.rotate_left_checked(distance)
}

/// Rotate `value` right by `distance` bits, `0 <= distance <= BITS`
///
/// Fails with `InvalidRange` naming `distance` otherwise.
#[inline]
pub fn rotate_right<T: Rotate>(value: T, distance: u32) -> Result<T> {
    value.rotate_right_checked(distance)
}

/// Rotate `value` left by `distance % BITS` bits
#[inline(always)]
pub fn rotate_left_unchecked<T: Rotate>(value: T, distance: u32) -> T {
    value.rotl(distance)
}

/// Rotate `value` right by `distance % BITS` bits
#[inline(always)]
pub fn rotate_right_unchecked<T: Rotate>(value: T, distance: u32) -> T {
    value.rotr(distance)
}
