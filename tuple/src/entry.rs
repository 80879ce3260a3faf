//! Byte entries exchanged with the storage engine.

/// An owned key or data entry.
///
/// Entries order bytewise, which is the default key order of the storage
/// engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    data: Vec<u8>,
}

impl Entry {
    /// Creates an entry from raw bytes.
    #[must_use]
    pub const fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns the entry bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the entry and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the entry size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the entry holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Entry {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Entry {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[u8]> for Entry {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accessors() {
        let entry = Entry::from(&[1u8, 2, 3][..]);
        assert_eq!(entry.len(), 3);
        assert!(!entry.is_empty());
        assert_eq!(entry.as_bytes(), &[1, 2, 3]);
        assert_eq!(entry.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn entries_order_bytewise() {
        let short = Entry::new(vec![0x01]);
        let long = Entry::new(vec![0x01, 0x00]);
        let high = Entry::new(vec![0x02]);
        assert!(short < long);
        assert!(long < high);
    }

    #[test]
    fn default_is_empty() {
        assert!(Entry::default().is_empty());
    }
}
