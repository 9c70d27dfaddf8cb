//! Deterministic name hashing.
//!
//! [`NameHash`] is a 64-bit XXHash64 of a parameter name mixed with a domain
//! constant. The template compiler uses it to build escape keys: temporary
//! markers that replace escaped placeholders while substitution runs.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker for escape-key hashes.
const ESCAPE_DOMAIN: u64 = 0x6a09e667f3bcc908;

/// Opens an escape key. Private-use code point, never produced by templates.
pub const KEY_OPEN: char = '\u{E000}';

/// Closes an escape key.
pub const KEY_CLOSE: char = '\u{E001}';

/// A deterministic 64-bit hash of a name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NameHash(pub u64);

impl NameHash {
    /// Hash a name. The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        NameHash(ESCAPE_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Escape key for this hash: the hex digits between two sentinel
    /// characters. Keys contain no sigil, so substitution cannot touch them.
    pub fn escape_key(self) -> String {
        format!("{}{:016x}{}", KEY_OPEN, self.0, KEY_CLOSE)
    }
}

impl fmt::Debug for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameHash({:#018x})", self.0)
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(NameHash::from_name("value"), NameHash::from_name("value"));
        assert_ne!(NameHash::from_name("value"), NameHash::from_name("values"));
    }

    #[test]
    fn escape_key_shape() {
        let key = NameHash::from_name("value").escape_key();
        assert!(key.starts_with(KEY_OPEN));
        assert!(key.ends_with(KEY_CLOSE));
        assert_eq!(key.chars().count(), 18);
        assert!(!key.contains('$'));
    }
}
