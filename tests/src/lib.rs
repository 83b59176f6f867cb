//! Testing utilities and benchmarks for the dbytes library
//!
//! Shared proptest strategies and reference implementations used by the
//! integration tests under `tests/`.

pub mod reference;
