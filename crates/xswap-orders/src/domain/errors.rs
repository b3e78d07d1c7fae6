//! # Domain Errors
//!
//! Error types for swap order construction and (de)serialization.

use thiserror::Error;

/// Hash type (32-byte Keccak-256).
pub type Hash = [u8; 32];

/// Result alias used throughout the crate.
pub type OrderResult<T> = Result<T, OrderError>;

/// Order error types.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Secret is empty or not decodable.
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// Multi-fill commitment requested over zero leaves.
    #[error("Empty leaf set: multi-fill hash lock needs at least one secret")]
    EmptyLeafSet,

    /// A structurally mandatory part of the escrow extension is missing.
    #[error("Missing escrow extension: {0}")]
    MissingEscrowExtension(String),

    /// Not enough original secret material to rebuild an equivalent order.
    #[error("Reconstruction ambiguous: {0}")]
    ReconstructionAmbiguous(String),

    /// Transport payload could not be decoded.
    #[error("Malformed transport data: {0}")]
    MalformedTransportData(String),

    /// Supplied secret material does not hash to the order's commitment.
    #[error("Secret material does not match hash lock (expected 0x{expected}, derived 0x{derived})")]
    CommitmentMismatch {
        /// Hex of the order's commitment value
        expected: String,
        /// Hex of the value derived from the supplied secrets
        derived: String,
    },

    /// Multiple fills without partial fills.
    #[error("Inconsistent fill flags: multiple fills require partial fills")]
    InconsistentFillFlags,

    /// Order parameter outside its allowed range.
    #[error("Invalid parameter {field}: {reason}")]
    InvalidParameter {
        /// Field name
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Time-lock stages are not strictly increasing.
    #[error("Time lock ordering violated: {earlier}={earlier_value} must be < {later}={later_value}")]
    TimeLockOrdering {
        /// Stage expected to come first
        earlier: &'static str,
        /// Its offset
        earlier_value: u64,
        /// Stage expected to come later
        later: &'static str,
        /// Its offset
        later_value: u64,
    },

    /// Merkle leaf index past the end of the leaf set.
    #[error("Leaf index {index} out of range ({count} leaves)")]
    LeafIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of leaves
        count: usize,
    },

    /// Address string is not 20 hex-encoded bytes.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Stored order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(uuid::Uuid),

    /// Persistence collaborator failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Signing collaborator failure.
    #[error("Signing error: {0}")]
    Signing(String),
}

impl OrderError {
    /// Shorthand for [`OrderError::InvalidParameter`].
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures caused by the caller's secret material rather than
    /// by order structure.
    pub fn is_secret_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSecret(_)
                | Self::EmptyLeafSet
                | Self::CommitmentMismatch { .. }
                | Self::ReconstructionAmbiguous(_)
        )
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedTransportData(err.to_string())
    }
}
