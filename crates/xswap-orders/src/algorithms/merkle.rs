//! # Merkle Tree
//!
//! Commutative Keccak Merkle tree over multi-fill leaves.
//!
//! Layout matches the escrow contracts' proof verifier: leaves are sorted,
//! stored right-to-left at the tail of a `2n - 1` node array, and every
//! parent is `keccak256(min(a, b) ‖ max(a, b))`. Proofs are sibling lists
//! from leaf to root; no left/right flags are needed because pair hashing
//! is order independent.

use super::secret::keccak256;
use crate::domain::{Hash, OrderError, OrderResult};

/// Hash two nodes in sorted order.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    keccak256(&buf)
}

/// Fold a proof onto a leaf, yielding the implied root.
pub fn process_proof(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |computed, sibling| hash_pair(&computed, sibling))
}

/// True if `proof` links `leaf` to `root`.
pub fn verify_proof(root: &Hash, leaf: &Hash, proof: &[Hash]) -> bool {
    process_proof(leaf, proof) == *root
}

/// Complete binary tree built once from a leaf set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    /// Node array, root at 0.
    nodes: Vec<Hash>,
    /// Node position of each input leaf, by input index.
    positions: Vec<usize>,
}

impl MerkleTree {
    /// Build the tree. Fails on an empty leaf set.
    pub fn new(leaves: &[Hash]) -> OrderResult<Self> {
        if leaves.is_empty() {
            return Err(OrderError::EmptyLeafSet);
        }

        let mut sorted: Vec<(Hash, usize)> = leaves
            .iter()
            .enumerate()
            .map(|(idx, leaf)| (*leaf, idx))
            .collect();
        sorted.sort();

        let len = 2 * leaves.len() - 1;
        let mut nodes = vec![[0u8; 32]; len];
        let mut positions = vec![0usize; leaves.len()];

        for (i, (leaf, input_idx)) in sorted.iter().enumerate() {
            let pos = len - 1 - i;
            nodes[pos] = *leaf;
            positions[*input_idx] = pos;
        }

        for i in (0..len - leaves.len()).rev() {
            nodes[i] = hash_pair(&nodes[2 * i + 1], &nodes[2 * i + 2]);
        }

        Ok(Self { nodes, positions })
    }

    /// Tree root.
    pub fn root(&self) -> Hash {
        self.nodes[0]
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; an empty tree cannot be built.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Leaf at input index.
    pub fn leaf(&self, index: usize) -> OrderResult<Hash> {
        self.position(index).map(|pos| self.nodes[pos])
    }

    /// Inclusion proof for the leaf at input index.
    pub fn proof(&self, index: usize) -> OrderResult<Vec<Hash>> {
        let mut pos = self.position(index)?;
        let mut proof = Vec::new();
        while pos > 0 {
            let sibling = if pos % 2 == 1 { pos + 1 } else { pos - 1 };
            proof.push(self.nodes[sibling]);
            pos = (pos - 1) / 2;
        }
        Ok(proof)
    }

    fn position(&self, index: usize) -> OrderResult<usize> {
        self.positions
            .get(index)
            .copied()
            .ok_or(OrderError::LeafIndexOutOfRange {
                index,
                count: self.positions.len(),
            })
    }
}
