use std::sync::Once;

use similar_asserts::assert_eq;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_check() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_metrics_count_api_requests() {
    // GIVEN
    static SETUP: Once = Once::new();
    SETUP.call_once(notice_server::metrics::setup);

    let context = TestContext::new().await;
    context.api.notices.list("").await;

    // WHEN
    let resp = context.api.other.metrics().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.text().await;
    assert!(body.contains("incoming_requests"));
    assert!(body.contains("response_time"));
}
