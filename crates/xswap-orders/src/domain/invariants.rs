//! # Domain Invariants
//!
//! Business rules checked when an order is built or reconstructed.

use super::auction::Whitelist;
use super::errors::{OrderError, OrderResult};
use super::hash_lock::HashLock;
use super::secure_secret::SecretMaterial;
use super::time_locks::TimeLocks;
use super::value_objects::UINT_40_MAX;

/// Invariant: multiple fills imply partial fills.
pub fn invariant_fill_flags(
    allow_partial_fills: bool,
    allow_multiple_fills: bool,
) -> OrderResult<()> {
    if allow_multiple_fills && !allow_partial_fills {
        return Err(OrderError::InconsistentFillFlags);
    }
    Ok(())
}

/// Invariant: nonce fits the 40-bit maker traits slot.
pub fn invariant_nonce_range(nonce: u64) -> OrderResult<()> {
    if nonce > UINT_40_MAX {
        return Err(OrderError::invalid_parameter(
            "nonce",
            format!("{nonce} exceeds {UINT_40_MAX}"),
        ));
    }
    Ok(())
}

/// Invariant: both chain ids are positive.
pub fn invariant_chain_ids(src_chain_id: u64, dst_chain_id: u64) -> OrderResult<()> {
    if src_chain_id == 0 {
        return Err(OrderError::invalid_parameter("srcChainId", "must be positive"));
    }
    if dst_chain_id == 0 {
        return Err(OrderError::invalid_parameter("dstChainId", "must be positive"));
    }
    Ok(())
}

/// Invariant: secret material re-derives the stored commitment.
pub fn invariant_secrets_match(
    material: &SecretMaterial,
    hash_lock: &HashLock,
) -> OrderResult<()> {
    let derived = HashLock::from_material(material)?;
    if derived != *hash_lock {
        return Err(OrderError::CommitmentMismatch {
            expected: hex::encode(hash_lock.value()),
            derived: hex::encode(derived.value()),
        });
    }
    Ok(())
}

/// Policy: a non-monotonic schedule is allowed but logged.
pub fn check_time_lock_schedule(time_locks: &TimeLocks) {
    if let Err(err) = time_locks.validate() {
        tracing::warn!("[xswap] Unusable escrow schedule accepted: {}", err);
    }
}

/// Policy: duplicate resolvers are allowed but logged.
pub fn check_whitelist_duplicates(whitelist: &Whitelist) {
    let dups = whitelist.duplicates();
    if !dups.is_empty() {
        tracing::warn!(
            "[xswap] Whitelist lists {} resolver(s) more than once; first entry wins",
            dups.len()
        );
    }
}
