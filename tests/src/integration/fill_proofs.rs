//! # Fill Proof Flows
//!
//! A resolver revealing secret `i` of a multi-fill order must be able to
//! prove it against the commitment of the order rebuilt from transport.

#[cfg(test)]
mod tests {
    use super::super::seeded_order;
    use xswap_orders::{
        from_text, to_text, HashLock, MerkleTree, OrderError, SecretMaterial, SerializeOverrides,
    };

    fn secrets() -> Vec<String> {
        (0..6).map(|i| format!("fill-secret-{i}")).collect()
    }

    #[test]
    fn test_every_secret_proves_against_rebuilt_order() {
        let secrets = secrets();
        let material = SecretMaterial::multiple(secrets.iter().map(String::as_str));
        let created = seeded_order(material, 11);
        let text = to_text(
            &created.order,
            Some(&created.secrets),
            &SerializeOverrides::default(),
        )
        .unwrap();
        let rebuilt = from_text(&text).unwrap();

        let leaves = HashLock::get_merkle_leaves(&secrets).unwrap();
        for (i, secret) in secrets.iter().enumerate() {
            let proof = HashLock::get_proof(&leaves, i).unwrap();
            assert!(rebuilt.hash_lock().verify_fill(secret, i, &proof).unwrap());
        }
    }

    #[test]
    fn test_secret_at_wrong_index_fails() {
        let secrets = secrets();
        let material = SecretMaterial::multiple(secrets.iter().map(String::as_str));
        let created = seeded_order(material, 12);
        let leaves = HashLock::get_merkle_leaves(&secrets).unwrap();

        let proof_for_1 = HashLock::get_proof(&leaves, 1).unwrap();
        assert!(!created
            .order
            .hash_lock()
            .verify_fill(&secrets[0], 1, &proof_for_1)
            .unwrap());
        assert!(!created
            .order
            .hash_lock()
            .verify_fill(&secrets[1], 2, &proof_for_1)
            .unwrap());
    }

    #[test]
    fn test_index_past_leaf_count_rejected() {
        let secrets = secrets();
        let material = SecretMaterial::multiple(secrets.iter().map(String::as_str));
        let created = seeded_order(material, 13);
        assert!(matches!(
            created.order.hash_lock().verify_fill(&secrets[0], 6, &[]),
            Err(OrderError::LeafIndexOutOfRange { index: 6, count: 6 })
        ));
    }

    #[test]
    fn test_tree_proofs_match_hash_lock_proofs() {
        let secrets = secrets();
        let leaves = HashLock::get_merkle_leaves(&secrets).unwrap();
        let tree = MerkleTree::new(&leaves).unwrap();
        for i in 0..leaves.len() {
            assert_eq!(tree.proof(i).unwrap(), HashLock::get_proof(&leaves, i).unwrap());
        }
    }

    #[test]
    fn test_single_fill_ignores_proof() {
        let created = seeded_order(SecretMaterial::single("topsecret"), 14);
        let lock = created.order.hash_lock();
        assert!(lock.verify_fill("topsecret", 0, &[]).unwrap());
        assert!(!lock.verify_fill("wrong", 0, &[]).unwrap());
        assert!(matches!(
            lock.verify_fill("", 0, &[]),
            Err(OrderError::InvalidSecret(_))
        ));
    }
}
