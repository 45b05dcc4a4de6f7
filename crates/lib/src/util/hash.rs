//! Fingerprints for generated configuration.
//!
//! A fingerprint is the SHA-256 of the JSON-serialized value. Two values that
//! serialize identically share a fingerprint, which is how repeated builds with
//! unchanged inputs are recognised as equal.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::consts::HASH_PREFIX_LEN;

pub type HashError = serde_json::Error;

/// A lowercase hexadecimal SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigHash(pub String);

impl ConfigHash {
  /// Short form for display, e.g. `"a1b2c3d4e5f6"`.
  pub fn short(&self) -> &str {
    let len = self.0.len().min(HASH_PREFIX_LEN);
    &self.0[..len]
  }
}

impl std::fmt::Display for ConfigHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

pub trait Hashable: Serialize {
  fn compute_hash(&self) -> Result<ConfigHash, HashError> {
    let serialized = serde_json::to_string(self)?;
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    Ok(ConfigHash(format!("{:x}", hasher.finalize())))
  }
}
