//! Error handling traits

use super::types::{Error, Result};

/// Extension trait for results carrying an [`Error`]
pub trait ResultExt<T>: Sized {
    /// Rename the offending parameter of a propagated error
    ///
    /// Used by wrappers whose public parameter names differ from those of
    /// the function they delegate to.
    fn with_name(self, name: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_name(self, name: &'static str) -> Result<T> {
        self.map_err(|e: Error| e.with_name(name))
    }
}
