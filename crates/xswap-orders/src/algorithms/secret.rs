//! # Secret Hashing
//!
//! Keccak-256 commitments over hash-lock secrets and indexed Merkle leaves.

use crate::domain::{Hash, OrderError, OrderResult};
use rand::RngCore;
use sha3::{Digest, Keccak256};

/// One-shot Keccak-256.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Decode a secret into the bytes that get hashed.
///
/// `0x`-prefixed secrets are hex and hash as their decoded bytes (the form
/// escrow contracts receive on withdrawal). Anything else hashes as UTF-8.
pub fn decode_secret(secret: &str) -> OrderResult<Vec<u8>> {
    if secret.is_empty() {
        return Err(OrderError::InvalidSecret("secret is empty".to_string()));
    }

    match secret.strip_prefix("0x") {
        Some("") => Err(OrderError::InvalidSecret(
            "hex secret has no digits".to_string(),
        )),
        Some(digits) => hex::decode(digits)
            .map_err(|e| OrderError::InvalidSecret(format!("hex secret: {e}"))),
        None => Ok(secret.as_bytes().to_vec()),
    }
}

/// Hash a secret into its single-fill commitment.
pub fn hash_secret(secret: &str) -> OrderResult<Hash> {
    decode_secret(secret).map(|bytes| keccak256(&bytes))
}

/// Leaf for secret `index`: `keccak256(uint64 index ‖ bytes32 secretHash)`.
///
/// Binding the index means the same secret at another position yields a
/// different leaf, so leaves cannot be replayed or reordered.
pub fn merkle_leaf(index: u64, secret_hash: &Hash) -> Hash {
    let mut packed = [0u8; 40];
    packed[..8].copy_from_slice(&index.to_be_bytes());
    packed[8..].copy_from_slice(secret_hash);
    keccak256(&packed)
}

/// Leaves from already-hashed secrets, in input order.
pub fn get_merkle_leaves_from_secret_hashes(secret_hashes: &[Hash]) -> Vec<Hash> {
    secret_hashes
        .iter()
        .enumerate()
        .map(|(idx, hash)| merkle_leaf(idx as u64, hash))
        .collect()
}

/// Leaves from raw secrets, in input order.
pub fn get_merkle_leaves<S: AsRef<str>>(secrets: &[S]) -> OrderResult<Vec<Hash>> {
    let hashes = secrets
        .iter()
        .map(|s| hash_secret(s.as_ref()))
        .collect::<OrderResult<Vec<_>>>()?;
    Ok(get_merkle_leaves_from_secret_hashes(&hashes))
}

/// Generate a random 32-byte secret, hex encoded with `0x` prefix.
pub fn generate_random_secret() -> String {
    generate_random_secret_with(&mut rand::thread_rng())
}

/// Same as [`generate_random_secret`] with a caller-supplied RNG.
pub fn generate_random_secret_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut secret = [0u8; 32];
    rng.fill_bytes(&mut secret);
    format!("0x{}", hex::encode(secret))
}
