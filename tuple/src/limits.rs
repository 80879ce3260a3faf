//! Configurable limits for bounded entry decoding.

/// Limits applied when a binding decodes an entry.
///
/// Entries come from storage and may be corrupt; these limits bound what a
/// binding accepts before it starts reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum entry size in bytes.
    pub max_entry_bytes: usize,

    /// Whether a binding may leave unread bytes at the end of an entry.
    pub allow_trailing_bytes: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Well above any key or record built from primitive fields.
            max_entry_bytes: 1024 * 1024,
            allow_trailing_bytes: false,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_entry_bytes: 256,
            allow_trailing_bytes: false,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_entry_bytes: usize::MAX,
            allow_trailing_bytes: true,
        }
    }
}
