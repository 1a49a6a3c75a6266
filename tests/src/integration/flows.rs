//! # Integration Test Flows
//!
//! Digest Generator → Item Store → Processing Service, wired the way the
//! runtime wires them.
//!
//! ## Flows Tested:
//!
//! 1. **Delayed completion**: an item is invisible until its write delay has passed
//! 2. **Statistics**: one timing sample per completed item
//! 3. **Concurrent submitters**: identifiers stay unique and contiguous
//! 4. **Shutdown**: terminate drains, later submissions are rejected

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use he_01_item_store::{new_item_store, ItemId, ItemStore, Reservation, StorageConfig, StoreError};
    use he_02_processing::{HashProcessingApi, ProcessingConfig, ProcessingError, ProcessingService};
    use node_runtime::{NodeConfig, SubsystemContainer};
    use shared_crypto::DigestGenerator;

    use crate::integration::{ITEM1_DIGEST, TESTING1_DIGEST, TEST_SECRET};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn start(config: ProcessingConfig) -> (Arc<ProcessingService>, Arc<dyn ItemStore>) {
        let digest = Arc::new(DigestGenerator::new(TEST_SECRET).unwrap());
        let store = new_item_store(&StorageConfig::default());
        let service = ProcessingService::start(config, digest, Arc::clone(&store)).unwrap();
        (Arc::new(service), store)
    }

    // =============================================================================
    // DELAYED COMPLETION
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_item_ready_after_write_delay() {
        let (service, _) = start(ProcessingConfig::new(1, Duration::from_secs(1)));

        let id = service.submit("item1".into()).await.unwrap();
        assert!(service.retrieve(id).unwrap_err().is_not_found());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(service.retrieve(id).unwrap(), ITEM1_DIGEST);

        service.terminate().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_regression_vectors_through_pipeline() {
        let (service, _) = start(ProcessingConfig::new(2, Duration::ZERO));

        let item1 = service.submit("item1".into()).await.unwrap();
        let testing1 = service.submit("testing1".into()).await.unwrap();
        service.terminate().await;

        assert_eq!(service.retrieve(item1).unwrap(), ITEM1_DIGEST);
        assert_eq!(service.retrieve(testing1).unwrap(), TESTING1_DIGEST);
    }

    #[tokio::test]
    async fn test_unknown_id_and_pending_id_look_the_same() {
        let (service, store) = start(ProcessingConfig::new(1, Duration::from_secs(30)));

        let pending = service.submit("slow".into()).await.unwrap();
        let never = ItemId::new(pending.as_u64() + 100);

        assert_eq!(
            service.retrieve(pending),
            Err(ProcessingError::Store(StoreError::NotFound(pending)))
        );
        assert_eq!(
            service.retrieve(never),
            Err(ProcessingError::Store(StoreError::NotFound(never)))
        );
        assert_eq!(store.get(never), Err(StoreError::NotFound(never)));
    }

    // =============================================================================
    // STATISTICS
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_stats_after_five_items() {
        let (service, _) = start(ProcessingConfig::new(2, Duration::from_millis(200)));
        assert_eq!(service.stats().count, 0);
        assert_eq!(service.stats().average_process_millis, 0.0);

        for input in ["alpha", "bravo", "charlie", "delta", "echo"] {
            service.submit(input.into()).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(1000)).await;

        let stats = service.stats();
        assert_eq!(stats.count, 5);
        assert!(stats.average_process_millis > 0.0);

        service.terminate().await;
    }

    // =============================================================================
    // CONCURRENT SUBMITTERS
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submitters_get_contiguous_ids() {
        let (service, _) = start(ProcessingConfig::new(4, Duration::ZERO).with_queue_capacity(8));

        let mut handles = Vec::new();
        for task in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for i in 0..25 {
                    ids.push(service.submit(format!("t{task}-{i}")).await.unwrap());
                }
                ids
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        let expected: HashSet<ItemId> = (1..=200).map(ItemId::new).collect();
        assert_eq!(ids, expected);

        service.terminate().await;
        assert_eq!(service.stats().count, 200);
        for id in expected {
            assert!(service.retrieve(id).is_ok());
        }
    }

    #[test]
    fn test_store_first_write_wins_across_reservations() {
        let store = new_item_store(&StorageConfig::default());

        let first = Reservation::acquire(&store);
        let id = first.id();
        first.persist("original".into()).unwrap();

        store.persist(id, "overwrite".into()).unwrap();
        assert_eq!(store.get(id).unwrap(), "original");

        assert_eq!(
            store.persist(ItemId::new(99), "x".into()),
            Err(StoreError::UnknownIdentifier(ItemId::new(99)))
        );
    }

    // =============================================================================
    // SHUTDOWN
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_terminate_drains_then_rejects() {
        let (service, _) = start(ProcessingConfig::new(2, Duration::from_millis(100)).with_queue_capacity(10));

        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(service.submit(format!("queued-{i}")).await.unwrap());
        }

        timeout(Duration::from_secs(5), service.terminate())
            .await
            .expect("terminate should finish once the queue drains");

        for id in ids {
            assert!(service.retrieve(id).is_ok(), "item {id} lost during drain");
        }
        assert_eq!(
            service.submit("late".into()).await,
            Err(ProcessingError::ShuttingDown)
        );
    }

    #[tokio::test]
    async fn test_container_matches_manual_wiring() {
        let mut config = NodeConfig::default();
        config.security.master_secret = TEST_SECRET.into();
        config.processing = ProcessingConfig::new(1, Duration::ZERO);

        let container = SubsystemContainer::new(config).unwrap();
        let id = container.processing.submit("item1".into()).await.unwrap();
        container.processing.terminate().await;

        assert_eq!(container.store.get(id).unwrap(), ITEM1_DIGEST);
    }
}
