//! Public keys and internal record identifiers.
//!
//! The record store addresses rows by an identifier made of a fixed three-character prefix and
//! an opaque suffix. Only the suffix is shared with requesters, so a public key maps back to
//! exactly one identifier by prepending the prefix again.

use crate::constants::RECORD_ID_PREFIX;
use std::fmt;

/// Internal record store identifier (`rec` + opaque suffix).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Build the internal identifier for a public key.
    pub fn from_public_key(key: &str) -> Self {
        Self(format!("{RECORD_ID_PREFIX}{key}"))
    }

    /// The public key shared with requesters.
    pub fn public_key(&self) -> &str {
        // Construction guarantees the prefix is present.
        &self.0[RECORD_ID_PREFIX.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_prefix_to_public_key() {
        let id = RecordId::from_public_key("ABC123");
        assert_eq!(id.as_str(), "recABC123");
        assert_eq!(id.to_string(), "recABC123");
    }

    #[test]
    fn public_key_round_trips() {
        for key in ["ABC123", "x", "8fKq2LmN0pQrStU", "한글"] {
            assert_eq!(RecordId::from_public_key(key).public_key(), key);
        }
    }
}
