//! Deterministic Signer Adapter
//!
//! Implements `OrderSigner` with a keyed Keccak-256 tag over the typed-data
//! JSON. The output has the shape of an ECDSA signature but carries no
//! cryptographic meaning; use it in tests and dry runs only.

use crate::algorithms::eip712::TypedData;
use crate::algorithms::secret::keccak256;
use crate::domain::{OrderError, OrderResult};
use crate::ports::outbound::OrderSigner;
use async_trait::async_trait;
use tracing::debug;

/// Produces the same 65-byte tag for the same key and payload.
#[derive(Clone, Debug, Default)]
pub struct DeterministicSigner {
    key: [u8; 32],
    /// Reject every request.
    pub should_fail: bool,
}

impl DeterministicSigner {
    /// Signer keyed with `key`.
    pub fn new(key: [u8; 32]) -> Self {
        Self {
            key,
            should_fail: false,
        }
    }

    /// Signer that rejects every request.
    pub fn failing() -> Self {
        Self {
            key: [0u8; 32],
            should_fail: true,
        }
    }
}

#[async_trait]
impl OrderSigner for DeterministicSigner {
    async fn sign_typed_data(&self, data: &TypedData) -> OrderResult<String> {
        if self.should_fail {
            return Err(OrderError::Signing("signer unavailable".to_string()));
        }

        let mut input = self.key.to_vec();
        input.extend_from_slice(data.to_json()?.as_bytes());
        let r = keccak256(&input);
        let s = keccak256(&r);

        let mut sig = Vec::with_capacity(65);
        sig.extend_from_slice(&r);
        sig.extend_from_slice(&s);
        sig.push(27);

        debug!("[xswap] Signed typed data for chain {}", data.domain.chain_id);
        Ok(format!("0x{}", hex::encode(sig)))
    }
}
