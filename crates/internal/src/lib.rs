//! Internal utilities for the dbytes library
//!
//! Scalar and run layouts for each supported integer width, built on
//! `byteorder`. Nothing here validates arguments; the checked wrappers live
//! in `dbytes-codec`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod bulk;
pub mod endian;

pub use endian::Word;
