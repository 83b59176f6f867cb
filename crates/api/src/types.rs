//! Byte-order selector shared by the codec crates

/// The endianness, or byte order, of a multi-byte integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endian {
    /// Most-significant byte first
    Big,
    /// Least-significant byte first
    Little,
}

impl Endian {
    /// Byte order of the target architecture
    ///
    /// Useful for selecting a bulk copy strategy. Data meant to be shared
    /// between machines should name an explicit order instead.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let endian = Self::Big;

        #[cfg(target_endian = "little")]
        let endian = Self::Little;

        endian
    }

    /// Network byte order, an alias for big-endian
    pub const fn network() -> Self {
        Self::Big
    }

    /// Whether this order matches the target architecture
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// The opposite byte order
    pub const fn reverse(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

impl Default for Endian {
    /// Network (big-endian) order
    fn default() -> Self {
        Self::network()
    }
}
