//! # HTTP Integration Flows
//!
//! The real processing service behind the real router, driven through
//! `tower::ServiceExt::oneshot` without opening sockets.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use he_01_item_store::{new_item_store, StorageConfig};
    use he_02_processing::{HashProcessingApi, ProcessingConfig, ProcessingService};
    use he_03_http_gateway::{shutdown_channel, GatewayConfig, HashGatewayService, ShutdownListener};
    use shared_crypto::DigestGenerator;

    use crate::integration::{ITEM1_DIGEST, TEST_SECRET};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Stack {
        app: Router,
        processing: Arc<ProcessingService>,
        shutdown: ShutdownListener,
    }

    fn stack(write_delay: Duration) -> Stack {
        let digest = Arc::new(DigestGenerator::new(TEST_SECRET).unwrap());
        let store = new_item_store(&StorageConfig::default());
        let processing = Arc::new(
            ProcessingService::start(ProcessingConfig::new(2, write_delay), digest, store).unwrap(),
        );

        let (trigger, shutdown) = shutdown_channel();
        let gateway =
            HashGatewayService::new(GatewayConfig::default(), processing.clone(), trigger).unwrap();

        Stack {
            app: gateway.router(),
            processing,
            shutdown,
        }
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // =============================================================================
    // SUBMIT → RETRIEVE → STATS
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_submit_then_poll_until_ready() {
        let stack = stack(Duration::from_millis(300));

        let response = stack
            .app
            .clone()
            .oneshot(post_form("/hash", "password=item1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/hash/1");
        assert_eq!(json_body(response).await, json!(1));

        let response = stack.app.clone().oneshot(get("/hash/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"message": "No item found at 1"})
        );

        tokio::time::sleep(Duration::from_millis(800)).await;

        let response = stack.app.clone().oneshot(get("/hash/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!(ITEM1_DIGEST));

        let response = stack.app.clone().oneshot(get("/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stats = json_body(response).await;
        assert_eq!(stats["total"], json!(1));
        assert!(stats["average"].as_f64().unwrap() > 0.0);

        stack.processing.terminate().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_form_encoding_is_decoded_before_hashing() {
        let stack = stack(Duration::ZERO);

        let response = stack
            .app
            .clone()
            .oneshot(post_form("/hash", "password=a%20b%2Bc%26d"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        stack.processing.terminate().await;

        let expected = DigestGenerator::new(TEST_SECRET)
            .unwrap()
            .generate("a b+c&d")
            .unwrap();
        let response = stack.app.oneshot(get("/hash/1")).await.unwrap();
        assert_eq!(json_body(response).await, json!(expected));
    }

    #[tokio::test]
    async fn test_stats_before_any_work() {
        let stack = stack(Duration::ZERO);

        let response = stack.app.oneshot(get("/stats")).await.unwrap();
        assert_eq!(
            json_body(response).await,
            json!({"total": 0, "average": 0.0})
        );
        stack.processing.terminate().await;
    }

    // =============================================================================
    // SHUTDOWN
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_shutdown_endpoint_then_drain() {
        let stack = stack(Duration::from_millis(100));

        let response = stack
            .app
            .clone()
            .oneshot(post_form("/hash", "password=queued"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = Request::builder()
            .method("POST")
            .uri("/shutdown")
            .body(Body::empty())
            .unwrap();
        let response = stack.app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // What the runtime does once the trigger fires.
        tokio::time::timeout(Duration::from_secs(2), stack.shutdown.clone().wait())
            .await
            .expect("shutdown trigger should fire");
        stack.processing.terminate().await;

        let response = stack.app.clone().oneshot(get("/hash/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = stack
            .app
            .oneshot(post_form("/hash", "password=late"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
