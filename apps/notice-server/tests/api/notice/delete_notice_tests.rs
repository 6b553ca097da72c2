use similar_asserts::assert_eq;

use crate::fixtures::{ADMIN_ROLE, USER_ROLE};
use crate::utils::api_clients::Caller;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_delete_notice_success() {
    // GIVEN
    let context = TestContext::new().await;
    let notice = context.db.notices.create("title", false).await;

    // WHEN
    let resp = context
        .api
        .notices
        .delete(notice.id, &Caller::role(ADMIN_ROLE))
        .await;

    // THEN
    assert_eq!(resp.status(), 204);
    assert!(context.db.notices.get(notice.id).await.is_none());

    let resp = context.api.notices.get(notice.id).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_notice_twice() {
    let context = TestContext::new().await;
    let notice = context.db.notices.create("title", false).await;
    let caller = Caller::role(ADMIN_ROLE);

    assert_eq!(context.api.notices.delete(notice.id, &caller).await.status(), 204);
    assert_eq!(context.api.notices.delete(notice.id, &caller).await.status(), 404);
}

#[tokio::test]
async fn test_delete_notice_forbidden() {
    // GIVEN
    let context = TestContext::new().await;
    let notice = context.db.notices.create("title", false).await;

    // WHEN
    let resp = context
        .api
        .notices
        .delete(notice.id, &Caller::role(USER_ROLE))
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert!(context.db.notices.get(notice.id).await.is_some());
}

#[tokio::test]
async fn test_delete_notice_missing_role_header() {
    let context = TestContext::new().await;
    let notice = context.db.notices.create("title", false).await;

    let resp = context
        .api
        .notices
        .delete(notice.id, &Caller::default())
        .await;

    assert_eq!(resp.status(), 400);
    assert!(context.db.notices.get(notice.id).await.is_some());
}
