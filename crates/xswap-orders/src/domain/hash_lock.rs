//! # Hash Lock
//!
//! Commitment to the secret material of an order. Secrets never live here;
//! only their hashes (single fill) or a Merkle root over indexed secret
//! hashes (multiple fills).

use super::errors::{Hash, OrderError, OrderResult};
use super::secure_secret::SecretMaterial;
use super::value_objects::HashLockKind;
use crate::algorithms::merkle::{verify_proof, MerkleTree};
use crate::algorithms::secret;

/// Largest leaf count whose `count - 1` fits the 16-bit parts field.
pub const MAX_PARTS: usize = u16::MAX as usize + 1;

/// Hash-lock commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashLock {
    /// Keccak-256 of a single secret.
    Single {
        /// Secret hash.
        hash: Hash,
    },
    /// Merkle root over `leaf_count` indexed secret hashes.
    Multiple {
        /// Tree root (unpacked).
        root: Hash,
        /// Number of leaves.
        leaf_count: usize,
    },
}

impl HashLock {
    /// Commitment for a single-fill order.
    pub fn for_single_fill(secret: &str) -> OrderResult<Self> {
        Ok(Self::Single {
            hash: secret::hash_secret(secret)?,
        })
    }

    /// Commitment for a multi-fill order from precomputed leaves.
    pub fn for_multiple_fills(leaves: &[Hash]) -> OrderResult<Self> {
        if leaves.len() > MAX_PARTS {
            return Err(OrderError::invalid_parameter(
                "hashLock",
                format!("{} leaves exceed the {MAX_PARTS} part limit", leaves.len()),
            ));
        }
        let tree = MerkleTree::new(leaves)?;
        Ok(Self::Multiple {
            root: tree.root(),
            leaf_count: tree.len(),
        })
    }

    /// Rebuild the commitment a bundle of secrets produces.
    pub fn from_material(material: &SecretMaterial) -> OrderResult<Self> {
        match material {
            SecretMaterial::Single(s) => Self::for_single_fill(s.expose()),
            SecretMaterial::Multiple(secrets) => {
                if secrets.is_empty() {
                    return Err(OrderError::EmptyLeafSet);
                }
                let raw: Vec<&str> = secrets.iter().map(|s| s.expose()).collect();
                Self::for_multiple_fills(&Self::get_merkle_leaves(&raw)?)
            }
        }
    }

    /// See [`secret::hash_secret`].
    pub fn hash_secret(secret: &str) -> OrderResult<Hash> {
        secret::hash_secret(secret)
    }

    /// See [`secret::get_merkle_leaves`].
    pub fn get_merkle_leaves<S: AsRef<str>>(secrets: &[S]) -> OrderResult<Vec<Hash>> {
        secret::get_merkle_leaves(secrets)
    }

    /// Inclusion proof for leaf `index`.
    pub fn get_proof(leaves: &[Hash], index: usize) -> OrderResult<Vec<Hash>> {
        MerkleTree::new(leaves)?.proof(index)
    }

    /// Scheme in use.
    pub fn kind(&self) -> HashLockKind {
        match self {
            Self::Single { .. } => HashLockKind::Single,
            Self::Multiple { .. } => HashLockKind::Multiple,
        }
    }

    /// Secret hash or Merkle root, without any packing.
    pub fn root(&self) -> Hash {
        match self {
            Self::Single { hash } => *hash,
            Self::Multiple { root, .. } => *root,
        }
    }

    /// Number of fill parts, for multi-fill locks.
    pub fn parts_count(&self) -> Option<usize> {
        match self {
            Self::Single { .. } => None,
            Self::Multiple { leaf_count, .. } => Some(*leaf_count),
        }
    }

    /// Value handed to the escrow contracts.
    ///
    /// Multi-fill roots carry `leaf_count - 1` in their top 16 bits.
    pub fn value(&self) -> Hash {
        match self {
            Self::Single { hash } => *hash,
            Self::Multiple { root, leaf_count } => {
                let mut packed = *root;
                let parts = leaf_count.saturating_sub(1) as u16;
                packed[..2].copy_from_slice(&parts.to_be_bytes());
                packed
            }
        }
    }

    /// `0x`-prefixed hex of [`HashLock::value`].
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.value()))
    }

    /// Check a revealed secret against the commitment.
    ///
    /// Single locks ignore `index` and `proof`. Multi-fill locks recompute
    /// leaf `index` from the secret and fold `proof` up to the root.
    pub fn verify_fill(&self, secret: &str, index: usize, proof: &[Hash]) -> OrderResult<bool> {
        let secret_hash = secret::hash_secret(secret)?;
        match self {
            Self::Single { hash } => Ok(secret_hash == *hash),
            Self::Multiple { root, leaf_count } => {
                if index >= *leaf_count {
                    return Err(OrderError::LeafIndexOutOfRange {
                        index,
                        count: *leaf_count,
                    });
                }
                let leaf = secret::merkle_leaf(index as u64, &secret_hash);
                Ok(verify_proof(root, &leaf, proof))
            }
        }
    }
}
