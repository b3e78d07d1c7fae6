//! # Round-Trip Flows
//!
//! Orders built by the construction workflow go through the serializer, the
//! JSON text form and the deserializer, and must come back unchanged when
//! the secrets travel with them.
//!
//! ## Flows Tested:
//!
//! 1. **Single secret**: `"topsecret"`, 1000 -> 2000, chain 1 -> 1001
//! 2. **Secret list**: `["a", "b", "c"]`, Merkle root preserved
//! 3. **No secrets**: placeholder written, strict path refuses, best-effort
//!    path flags the result
//! 4. **Extension without auction**: defaults written and reported

#[cfg(test)]
mod tests {
    use super::super::{init_tracing, seeded_order, ESCROW_FACTORY, MAKER};
    use xswap_orders::codec::transport::HashLockData;
    use xswap_orders::{
        deserialize, deserialize_best_effort, from_text, serialize, serialize_alternative,
        to_text, Fidelity, HashLock, HashLockKind, MerkleTree, Order, OrderError,
        OrderExtension, SecretMaterial, SecureSecret, SerializeDiagnostic, SerializeOverrides,
        SerializedOrder, U256,
    };

    // =============================================================================
    // SINGLE SECRET
    // =============================================================================

    #[test]
    fn test_single_secret_example_scenario() {
        init_tracing();
        let created = seeded_order(SecretMaterial::single("topsecret"), 1);

        let text = to_text(
            &created.order,
            Some(&created.secrets),
            &SerializeOverrides::default(),
        )
        .unwrap();
        let rebuilt = from_text(&text).unwrap();

        assert_eq!(rebuilt.making_amount(), U256::from(1000u64));
        assert_eq!(rebuilt.taking_amount(), U256::from(2000u64));
        assert_eq!(
            rebuilt.hash_lock().root(),
            HashLock::hash_secret("topsecret").unwrap()
        );
        assert!(!rebuilt.allow_multiple_fills());
        assert_eq!(rebuilt.maker(), MAKER);
        assert_eq!(rebuilt.src_chain_id(), 1);
        assert_eq!(rebuilt.dst_chain_id(), 1001);
        assert_eq!(rebuilt, created.order);
    }

    #[test]
    fn test_single_secret_hex_form() {
        let secret = "0x".to_string() + &"ab".repeat(32);
        let created = seeded_order(SecretMaterial::single(secret.as_str()), 2);
        let out = serialize(
            &created.order,
            Some(&created.secrets),
            &SerializeOverrides::default(),
        )
        .unwrap();
        let rebuilt = deserialize(&out.order).unwrap();
        assert_eq!(rebuilt.hash_lock(), created.order.hash_lock());
    }

    // =============================================================================
    // SECRET LIST
    // =============================================================================

    #[test]
    fn test_secret_list_example_scenario() {
        init_tracing();
        let secrets = ["a", "b", "c"];
        let leaves = HashLock::get_merkle_leaves(&secrets).unwrap();
        assert_eq!(leaves.len(), 3);
        assert_ne!(leaves[0], leaves[1]);
        assert_ne!(leaves[1], leaves[2]);
        assert_ne!(leaves[0], leaves[2]);

        let expected_root = MerkleTree::new(&leaves).unwrap().root();
        assert_eq!(
            MerkleTree::new(&HashLock::get_merkle_leaves(&secrets).unwrap())
                .unwrap()
                .root(),
            expected_root
        );

        let created = seeded_order(SecretMaterial::multiple(secrets), 3);
        let out = serialize(
            &created.order,
            Some(&created.secrets),
            &SerializeOverrides::default(),
        )
        .unwrap();
        assert!(out.is_faithful());

        let rebuilt = deserialize(&out.order).unwrap();
        assert_eq!(rebuilt.hash_lock().root(), expected_root);
        assert_eq!(rebuilt.hash_lock().parts_count(), Some(3));
        assert!(rebuilt.allow_partial_fills());
        assert!(rebuilt.allow_multiple_fills());
        assert_eq!(rebuilt, created.order);
    }

    #[test]
    fn test_leaves_are_index_sensitive() {
        let forward = HashLock::get_merkle_leaves(&["s0", "s1"]).unwrap();
        let again = HashLock::get_merkle_leaves(&["s0", "s1"]).unwrap();
        let reversed = HashLock::get_merkle_leaves(&["s1", "s0"]).unwrap();
        assert_eq!(forward, again);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_many_secrets_round_trip() {
        let secrets: Vec<String> = (0..17).map(|i| format!("secret-{i}")).collect();
        let created = seeded_order(SecretMaterial::multiple(secrets.iter().map(String::as_str)), 4);
        let text = to_text(
            &created.order,
            Some(&created.secrets),
            &SerializeOverrides::default(),
        )
        .unwrap();
        assert_eq!(from_text(&text).unwrap(), created.order);
    }

    // =============================================================================
    // NO SECRETS
    // =============================================================================

    #[test]
    fn test_without_secrets_only_best_effort() {
        init_tracing();
        let created = seeded_order(SecretMaterial::single("topsecret"), 5);
        let out = serialize(&created.order, None, &SerializeOverrides::default()).unwrap();

        assert_eq!(
            out.order.hash_lock.data,
            HashLockData::Single(SecureSecret::new("placeholder"))
        );
        assert!(out.has(&SerializeDiagnostic::SecretPlaceholder));

        let text = out.order.to_json().unwrap();
        let commitment = hex::encode(created.order.hash_lock().value());
        assert!(!text.contains(&commitment));

        assert!(matches!(
            from_text(&text),
            Err(OrderError::ReconstructionAmbiguous(_))
        ));

        let parsed = SerializedOrder::from_json(&text).unwrap();
        let best = deserialize_best_effort(&parsed).unwrap();
        assert_eq!(best.fidelity, Fidelity::BestEffort);
        assert_ne!(best.order.hash_lock(), created.order.hash_lock());
    }

    #[test]
    fn test_multi_fill_without_secrets_placeholder_list() {
        let created = seeded_order(SecretMaterial::multiple(["a", "b"]), 6);
        let out = serialize(&created.order, None, &SerializeOverrides::default()).unwrap();
        assert_eq!(out.order.hash_lock.kind, HashLockKind::Multiple);
        assert_eq!(
            out.order.hash_lock.data,
            HashLockData::Multiple(vec![SecureSecret::new("placeholder")])
        );
        assert!(out.order.original_params.allow_multiple_fills);
    }

    // =============================================================================
    // DEFAULTED EXTENSION
    // =============================================================================

    #[test]
    fn test_missing_auction_defaults_reported() {
        init_tracing();
        let created = seeded_order(SecretMaterial::single("topsecret"), 7);
        let ext = OrderExtension {
            escrow: Some(created.order.escrow().clone()),
            ..OrderExtension::default()
        };
        let bare = Order::from_extension(
            ESCROW_FACTORY,
            created.order.info().clone(),
            ext,
            *created.order.extra(),
        )
        .unwrap();

        let out = serialize(&bare, Some(&created.secrets), &SerializeOverrides::default()).unwrap();
        assert_eq!(out.order.auction.duration, "0");
        assert_eq!(out.order.auction.start_time, "0");
        assert!(out.order.whitelist.is_empty());
        assert!(out.has(&SerializeDiagnostic::DefaultedAuction));
        assert!(out.has(&SerializeDiagnostic::DefaultedWhitelist));
        assert!(!out.is_faithful());
    }

    #[test]
    fn test_missing_escrow_is_fatal() {
        let created = seeded_order(SecretMaterial::single("topsecret"), 8);
        let result = Order::from_extension(
            ESCROW_FACTORY,
            created.order.info().clone(),
            OrderExtension::default(),
            *created.order.extra(),
        );
        assert!(matches!(result, Err(OrderError::MissingEscrowExtension(_))));
    }

    // =============================================================================
    // ALTERNATIVE VIEW
    // =============================================================================

    #[test]
    fn test_alternative_view_omits_secrets() {
        let created = seeded_order(SecretMaterial::multiple(["a", "b", "c"]), 9);
        let view = serialize_alternative(&created.order);
        let json = serde_json::to_string(&view).unwrap();

        assert!(json.contains("\"escrowParams\""));
        assert!(json.contains(&created.order.hash_lock().to_hex()));
        assert!(!json.contains("originalParams"));
        assert_eq!(view.order_data.auction_end_time.as_deref(), Some("1700000120"));

        // Not a transport record
        assert!(from_text(&json).is_err());
    }
}
