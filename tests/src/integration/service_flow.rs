//! # Service Flows
//!
//! `OrderService` wired with the in-memory repository and the deterministic
//! signer: create -> submit -> load -> cancel.
//!
//! ## Flows Tested:
//!
//! 1. **Submit/load**: stored payload rebuilds the submitted order
//! 2. **Signature stability**: same order, same signer -> same signature
//! 3. **Concurrent submissions**: independent orders from parallel tasks
//! 4. **Strict config**: defaulted serializations are refused

#[cfg(test)]
mod tests {
    use super::super::{init_tracing, seeded_order, ESCROW_FACTORY, LIMIT_ORDER_PROTOCOL, MAKER};
    use std::sync::Arc;
    use xswap_orders::{
        DeterministicSigner, InMemoryOrderRepository, Order, OrderError, OrderExtension,
        OrderService, OrderServiceConfig, OrderStatus, SecretMaterial, SerializedOrder,
        SwapOrderApi,
    };

    type Service = OrderService<InMemoryOrderRepository, DeterministicSigner>;

    fn service(config: OrderServiceConfig) -> Arc<Service> {
        Arc::new(OrderService::new(
            config,
            Arc::new(InMemoryOrderRepository::new()),
            Arc::new(DeterministicSigner::new([0x42; 32])),
        ))
    }

    fn default_config() -> OrderServiceConfig {
        OrderServiceConfig {
            verifying_contract: LIMIT_ORDER_PROTOCOL,
            ..OrderServiceConfig::default()
        }
    }

    // =============================================================================
    // SUBMIT / LOAD
    // =============================================================================

    #[tokio::test]
    async fn test_submit_then_load() {
        init_tracing();
        let svc = service(default_config());
        let created = seeded_order(SecretMaterial::multiple(["a", "b", "c"]), 21);

        let record = svc.submit(&created.order, &created.secrets).await.unwrap();
        assert_eq!(record.maker, MAKER);
        assert_eq!(
            record.order_hash,
            format!(
                "0x{}",
                hex::encode(created.order.order_hash(LIMIT_ORDER_PROTOCOL))
            )
        );

        // Payload is the transport record, verbatim
        let payload = SerializedOrder::from_json(&record.payload).unwrap();
        assert_eq!(payload.src_chain_id, 1);
        assert_eq!(payload.dst_chain_id, 1001);

        let loaded = svc.load(record.id).await.unwrap();
        assert_eq!(loaded, created.order);
    }

    #[tokio::test]
    async fn test_signature_stable_for_same_order() {
        let created = seeded_order(SecretMaterial::single("topsecret"), 22);
        let a = service(default_config())
            .submit(&created.order, &created.secrets)
            .await
            .unwrap();
        let b = service(default_config())
            .submit(&created.order, &created.secrets)
            .await
            .unwrap();
        assert_eq!(a.signature, b.signature);
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_cancel_flow() {
        let svc = service(default_config());
        let created = seeded_order(SecretMaterial::single("topsecret"), 23);
        let record = svc.submit(&created.order, &created.secrets).await.unwrap();

        svc.cancel(record.id).await.unwrap();
        let listed = svc.orders_by_maker(&MAKER).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, OrderStatus::Cancelled);

        assert!(matches!(
            svc.cancel(record.id).await,
            Err(OrderError::InvalidParameter { .. })
        ));
        // Cancelled orders still load
        assert!(svc.load(record.id).await.is_ok());
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions() {
        let svc = service(default_config());

        let mut handles = Vec::new();
        for i in 0..8u64 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                let secret = format!("secret-{i}");
                let created = seeded_order(SecretMaterial::single(secret.as_str()), 100 + i);
                svc.submit(&created.order, &created.secrets).await.map(|r| r.id)
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(svc.orders_by_maker(&MAKER).await.unwrap().len(), 8);
    }

    // =============================================================================
    // STRICT CONFIG
    // =============================================================================

    #[tokio::test]
    async fn test_strict_config_refuses_defaults() {
        let svc = service(OrderServiceConfig {
            reject_defaulted: true,
            ..default_config()
        });
        let created = seeded_order(SecretMaterial::single("topsecret"), 24);
        let bare = Order::from_extension(
            ESCROW_FACTORY,
            created.order.info().clone(),
            OrderExtension {
                escrow: Some(created.order.escrow().clone()),
                ..OrderExtension::default()
            },
            *created.order.extra(),
        )
        .unwrap();

        assert!(matches!(
            svc.submit(&bare, &created.secrets).await,
            Err(OrderError::InvalidParameter { field: "order", .. })
        ));
        assert!(svc.orders_by_maker(&MAKER).await.unwrap().is_empty());
    }
}
