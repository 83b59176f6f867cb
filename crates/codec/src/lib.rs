//! Endianness codec for fixed-width integers
//!
//! Converts `u16 i16 u32 i32 u64 i64` values to and from big- or
//! little-endian bytes, one at a time or in runs. Every buffer-based
//! operation comes in two forms:
//!
//! - a checked form returning [`Result`], which validates all offsets and
//!   counts before touching any buffer, and
//! - an `_unchecked` form for callers that have already established bounds.
//!   It performs no validation and panics on out-of-bounds input.
//!
//! The checked forms are thin wrappers that validate and then call the
//! unchecked forms, so the two can never lay bytes out differently.
//!
//! ```
//! use dbytes_codec::{BigEndian, Endian, Order};
//!
//! assert_eq!(BigEndian::pack(0x1234u16), [0x12, 0x34]);
//!
//! let mut buf = [0u8; 8];
//! dbytes_codec::pack_into(-1i32, Endian::Little, &mut buf, 4).unwrap();
//! assert_eq!(buf, [0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod array;
pub mod order;
pub mod raw;
pub mod scalar;

pub use array::{pack_array, pack_array_unchecked, unpack_array, unpack_array_unchecked};
pub use order::{BigEndian, LittleEndian, NativeEndian, NetworkEndian, Order};
pub use scalar::{pack, pack_into, pack_into_unchecked, unpack, unpack_unchecked};

#[cfg(feature = "alloc")]
pub use array::pack_slice;
#[cfg(feature = "alloc")]
pub use scalar::pack_to_vec;

pub use dbytes_api::{Endian, Error, Result};
pub use dbytes_internal::Word;
