//! Public API types for the dbytes library
//!
//! This crate provides the pieces shared by every other dbytes crate: the
//! error taxonomy reported by checked entry points, the validation helpers
//! that produce those errors, and the [`Endian`] byte-order selector.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::Endian;
