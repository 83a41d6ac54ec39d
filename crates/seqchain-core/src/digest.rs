//! The digest type and the SHA-256 hash primitive.
//!
//! Digests flow through the system as strings, not byte arrays: every chain
//! step hashes the *textual* form of the previous digest concatenated with a
//! decimal nonce, so the canonical representation is the 64-character
//! lowercase hex rendering itself.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// A chain digest, canonically 64 lowercase hex characters.
///
/// The core treats the inner string as opaque: it performs no length or
/// character validation, and comparison is exact string equality. A caller
/// that wants strict hex validation must do it at its own boundary before
/// handing digests in; this is a deliberate gap, matching the verifier's
/// contract of never failing on well-formed strings.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(String);

impl Digest {
    /// Compute the SHA-256 digest of the given text.
    ///
    /// Hashes the UTF-8 bytes of `input` and renders the 32-byte result as
    /// 64 lowercase hex characters. Pure and infallible for any string.
    pub fn hash(input: &str) -> Self {
        let bytes = Sha256::digest(input.as_bytes());
        Self(hex::encode(bytes))
    }

    /// Wrap an existing digest string without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the canonical form in characters.
    pub const HEX_LEN: usize = 64;
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Truncate by characters: opaque origins may contain multibyte UTF-8.
        let head: String = self.0.chars().take(16).collect();
        write!(f, "Digest({head})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Digest {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Digest {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
