//! # Secure Secret Type
//!
//! Wrapper for hash-lock secrets that zeroizes memory on drop.
//!
//! ## Security
//!
//! Secrets are the only thing standing between a resolver and the escrowed
//! funds. They travel with an order only as out-of-band reconstruction
//! material, so the wrapper keeps them out of `Debug` output and wipes the
//! backing buffer when the value is dropped.

use super::value_objects::HashLockKind;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secret string that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    inner: String,
}

impl SecureSecret {
    /// Wrap a raw secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Get the raw secret (use carefully!).
    ///
    /// # Security
    ///
    /// Avoid keeping the returned reference around; hash or serialize it and
    /// let go.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// True if the secret is the empty string.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SecureSecret(***)")
    }
}

impl From<&str> for SecureSecret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SecureSecret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// The transport format carries the raw string; callers decide where it goes.
impl Serialize for SecureSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// The secret material an order was built from.
///
/// Orders only ever hold commitments; this bundle is what the maker keeps so
/// the order can later be serialized and rebuilt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretMaterial {
    /// Single-fill order: one secret.
    Single(SecureSecret),
    /// Multi-fill order: one secret per Merkle leaf, in leaf order.
    Multiple(Vec<SecureSecret>),
}

impl SecretMaterial {
    /// Single-fill material.
    pub fn single(secret: impl Into<SecureSecret>) -> Self {
        Self::Single(secret.into())
    }

    /// Multi-fill material, preserving the given order.
    pub fn multiple<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SecureSecret>,
    {
        Self::Multiple(secrets.into_iter().map(Into::into).collect())
    }

    /// Commitment scheme this material produces.
    pub fn kind(&self) -> HashLockKind {
        match self {
            Self::Single(_) => HashLockKind::Single,
            Self::Multiple(_) => HashLockKind::Multiple,
        }
    }

    /// Number of secrets held.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(secrets) => secrets.len(),
        }
    }

    /// True when a multi-fill bundle holds no secrets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw secret strings, in leaf order.
    pub fn exposed(&self) -> Vec<&str> {
        match self {
            Self::Single(secret) => vec![secret.expose()],
            Self::Multiple(secrets) => secrets.iter().map(SecureSecret::expose).collect(),
        }
    }
}
