//! # Time Locks
//!
//! Staged escrow schedule. Every value is an offset in seconds from the
//! escrow's deployment, not an absolute timestamp.

use super::errors::{OrderError, OrderResult};
use serde::{Deserialize, Serialize};

/// The seven staged escrow deadlines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLocks {
    /// Source chain: taker may withdraw from here.
    pub src_withdrawal: u64,
    /// Source chain: anyone may withdraw on the taker's behalf.
    pub src_public_withdrawal: u64,
    /// Source chain: taker may cancel.
    pub src_cancellation: u64,
    /// Source chain: anyone may cancel.
    pub src_public_cancellation: u64,
    /// Destination chain: maker may receive from here.
    pub dst_withdrawal: u64,
    /// Destination chain: anyone may withdraw for the maker.
    pub dst_public_withdrawal: u64,
    /// Destination chain: taker may cancel.
    pub dst_cancellation: u64,
}

/// Escrow lifecycle stage at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowStage {
    /// Waiting out chain finality; nobody may act.
    FinalityLock,
    /// Only the designated taker may withdraw.
    PrivateWithdrawal,
    /// Any resolver may withdraw.
    PublicWithdrawal,
    /// Only the taker may cancel.
    PrivateCancellation,
    /// Anyone may cancel (source chain only).
    PublicCancellation,
}

impl TimeLocks {
    /// Build a schedule. Any values are accepted; see [`TimeLocks::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src_withdrawal: u64,
        src_public_withdrawal: u64,
        src_cancellation: u64,
        src_public_cancellation: u64,
        dst_withdrawal: u64,
        dst_public_withdrawal: u64,
        dst_cancellation: u64,
    ) -> Self {
        Self {
            src_withdrawal,
            src_public_withdrawal,
            src_cancellation,
            src_public_cancellation,
            dst_withdrawal,
            dst_public_withdrawal,
            dst_cancellation,
        }
    }

    /// Check both chains' stages are strictly increasing.
    ///
    /// Returns the first violated pair.
    pub fn validate(&self) -> OrderResult<()> {
        let chains: [&[(&'static str, u64)]; 2] = [
            &[
                ("srcWithdrawal", self.src_withdrawal),
                ("srcPublicWithdrawal", self.src_public_withdrawal),
                ("srcCancellation", self.src_cancellation),
                ("srcPublicCancellation", self.src_public_cancellation),
            ],
            &[
                ("dstWithdrawal", self.dst_withdrawal),
                ("dstPublicWithdrawal", self.dst_public_withdrawal),
                ("dstCancellation", self.dst_cancellation),
            ],
        ];

        for stages in chains {
            for pair in stages.windows(2) {
                let (earlier, earlier_value) = pair[0];
                let (later, later_value) = pair[1];
                if earlier_value >= later_value {
                    return Err(OrderError::TimeLockOrdering {
                        earlier,
                        earlier_value,
                        later,
                        later_value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Source escrow stage at `now` for an escrow deployed at `deployed_at`.
    pub fn src_stage_at(&self, deployed_at: u64, now: u64) -> EscrowStage {
        let elapsed = now.saturating_sub(deployed_at);
        if elapsed >= self.src_public_cancellation {
            EscrowStage::PublicCancellation
        } else if elapsed >= self.src_cancellation {
            EscrowStage::PrivateCancellation
        } else if elapsed >= self.src_public_withdrawal {
            EscrowStage::PublicWithdrawal
        } else if elapsed >= self.src_withdrawal {
            EscrowStage::PrivateWithdrawal
        } else {
            EscrowStage::FinalityLock
        }
    }

    /// Destination escrow stage at `now` for an escrow deployed at `deployed_at`.
    pub fn dst_stage_at(&self, deployed_at: u64, now: u64) -> EscrowStage {
        let elapsed = now.saturating_sub(deployed_at);
        if elapsed >= self.dst_cancellation {
            EscrowStage::PrivateCancellation
        } else if elapsed >= self.dst_public_withdrawal {
            EscrowStage::PublicWithdrawal
        } else if elapsed >= self.dst_withdrawal {
            EscrowStage::PrivateWithdrawal
        } else {
            EscrowStage::FinalityLock
        }
    }
}
