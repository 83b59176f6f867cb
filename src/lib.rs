//! # dbytes
//!
//! Fixed-width integers as big- or little-endian bytes, plus circular bit
//! rotation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dbytes = "0.3"
//! ```
//!
//! ```
//! use dbytes::prelude::*;
//!
//! let mut frame = [0u8; 6];
//! BigEndian::pack_into(0xCAFEu16, &mut frame, 0)?;
//! LittleEndian::pack_into(-2i32, &mut frame, 2)?;
//! assert_eq!(frame, [0xCA, 0xFE, 0xFE, 0xFF, 0xFF, 0xFF]);
//!
//! assert_eq!(rotate_left(0x81u8, 1)?, 0x03);
//! # Ok::<(), dbytes::Error>(())
//! ```
//!
//! ## Features
//!
//! - `codec` (default): the endianness codec
//! - `bits` (default): bit rotation
//! - `std` (default): `std::error::Error` for [`Error`]
//! - `alloc`: allocating helpers such as `pack_to_vec`
//! - `serde`: serde support for [`Endian`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dbytes-api`]: error types, validation and [`Endian`]
//! - [`dbytes-internal`]: the [`Word`](internal::Word) trait over `byteorder`, scalar and run layout
//! - [`dbytes-codec`]: checked and unchecked pack/unpack
//! - [`dbytes-bits`]: rotation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use dbytes_api as api;
pub use dbytes_internal as internal;

pub use dbytes_api::{Endian, Error, Result};

// Feature-gated re-exports
#[cfg(feature = "codec")]
pub use dbytes_codec as codec;

#[cfg(feature = "bits")]
pub use dbytes_bits as bits;

/// Common imports for dbytes users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Endian, Error, Result, ResultExt};

    pub use crate::internal::Word;

    #[cfg(feature = "codec")]
    pub use crate::codec::{
        pack, pack_array, pack_into, unpack, unpack_array, BigEndian, LittleEndian, Order,
        NativeEndian, NetworkEndian,
    };

    #[cfg(feature = "bits")]
    pub use crate::bits::{rotate_left, rotate_right, Rotate};
}
