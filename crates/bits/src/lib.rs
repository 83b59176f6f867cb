//! Circular bit rotation of fixed-width integers
//!
//! Bits shifted out of one end re-enter at the other. Checked entry points
//! accept distances `0..=BITS`; a distance of `0` or `BITS` returns the
//! value unchanged. Unchecked entry points reduce the distance modulo
//! `BITS` and never fail.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod rotate;

pub use rotate::{rotate_left, rotate_left_unchecked, rotate_right, rotate_right_unchecked, Rotate};

pub use dbytes_api::{Error, Result};
