use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content fingerprint of a raw dataset text (lowercase hex SHA-256).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wrap a previously stored hex digest. Surrounding whitespace (a trailing
    /// newline in a lock file) is ignored.
    pub fn from_hex(hex: &str) -> Self {
        Self(hex.trim().to_ascii_lowercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `true` when `text` differs from what `previous` was computed over, or when
/// there is no previous fingerprint at all.
pub fn needs_republish(text: &str, previous: Option<&Fingerprint>) -> bool {
    previous.is_none_or(|prev| *prev != Fingerprint::of(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            Fingerprint::of("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn republish_only_on_change() {
        let text = r#"{"Rust":{"type":"programming"}}"#;
        let stored = Fingerprint::of(text);
        assert!(!needs_republish(text, Some(&stored)));
        assert!(needs_republish(r#"{"Rust":{"type":"data"}}"#, Some(&stored)));
        assert!(needs_republish(text, None));
    }

    #[test]
    fn stored_hex_is_normalized() {
        let fp = Fingerprint::of("abc");
        let stored = format!("{}\n", fp.as_str().to_uppercase());
        assert_eq!(Fingerprint::from_hex(&stored), fp);
    }
}
