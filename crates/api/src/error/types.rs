//! Error type definitions for codec and rotation entry points

/// Error reported by checked entry points
///
/// Every variant names the parameter that failed validation. Errors are
/// produced before any byte of a caller buffer is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// A required buffer or array argument is absent
    #[cfg_attr(feature = "std", error("{name} must not be null"))]
    NullArgument {
        /// Name of the absent parameter
        name: &'static str,
    },

    /// An offset, count or distance is outside its permitted range
    ///
    /// `limit` is the largest accepted value for an offset or count that is
    /// itself out of bounds, or the array length for an offset that is at or
    /// beyond the end of its array.
    #[cfg_attr(feature = "std", error("{name} out of range: {value} (limit {limit})"))]
    InvalidRange {
        /// Name of the parameter
        name: &'static str,
        /// Value that was supplied
        value: usize,
        /// Bound the value violated
        limit: usize,
    },

    /// An offset that is in bounds on its own, but whose span is not
    #[cfg_attr(
        feature = "std",
        error("{name} plus count ends at {span}, past an array of length {len}")
    )]
    InvalidArgumentCombination {
        /// Name of the offset parameter
        name: &'static str,
        /// End of the requested span (offset plus count)
        span: usize,
        /// Length of the array the span was checked against
        len: usize,
    },
}

/// Result type for checked operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `NullArgument` error
    pub const fn null(name: &'static str) -> Self {
        Self::NullArgument { name }
    }

    /// Shorthand to create an `InvalidRange` error
    pub const fn range(name: &'static str, value: usize, limit: usize) -> Self {
        Self::InvalidRange { name, value, limit }
    }

    /// Shorthand to create an `InvalidArgumentCombination` error
    pub const fn combination(name: &'static str, span: usize, len: usize) -> Self {
        Self::InvalidArgumentCombination { name, span, len }
    }

    /// Name of the parameter that failed validation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NullArgument { name }
            | Self::InvalidRange { name, .. }
            | Self::InvalidArgumentCombination { name, .. } => *name,
        }
    }

    /// Replace the parameter name, keeping everything else
    pub const fn with_name(self, name: &'static str) -> Self {
        match self {
            Self::NullArgument { .. } => Self::NullArgument { name },
            Self::InvalidRange { value, limit, .. } => Self::InvalidRange { name, value, limit },
            Self::InvalidArgumentCombination { span, len, .. } => {
                Self::InvalidArgumentCombination { name, span, len }
            }
        }
    }

    /// Whether this is a `NullArgument` error
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }

    /// Whether this is an `InvalidRange` error
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }

    /// Whether this is an `InvalidArgumentCombination` error
    pub const fn is_combination(&self) -> bool {
        matches!(self, Self::InvalidArgumentCombination { .. })
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NullArgument { name } => write!(f, "{} must not be null", name),
            Self::InvalidRange { name, value, limit } => {
                write!(f, "{} out of range: {} (limit {})", name, value, limit)
            }
            Self::InvalidArgumentCombination { name, span, len } => write!(
                f,
                "{} plus count ends at {}, past an array of length {}",
                name, span, len
            ),
        }
    }
}
