use serde_json::json;
use shared_types::NoticeId;
use similar_asserts::assert_eq;

use crate::fixtures::{ADMIN_ROLE, USER_ROLE};
use crate::utils::api_clients::Caller;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_notice_success() {
    // GIVEN
    let context = TestContext::new().await;
    context.db.members.create(1, "김운영").await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "점검 안내",
                "noticeContent": "1월 10일 서버 점검이 있습니다."
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;

    assert_eq!(resp["noticeTitle"], "점검 안내");
    assert_eq!(resp["noticeContent"], "1월 10일 서버 점검이 있습니다.");
    assert_eq!(resp["isFixed"], false);
    assert_eq!(resp["memberName"], "김운영");
    assert!(resp["createdAt"].as_str().unwrap().ends_with('Z'));

    let id = NoticeId::from(resp["noticeNo"].as_i64().unwrap());
    let notice = context.db.notices.get(id).await.unwrap();
    assert_eq!(notice.title, "점검 안내");
    assert_eq!(i64::from(notice.member_id), 1);
    assert!(!notice.is_fixed);
}

#[tokio::test]
async fn test_create_pinned_notice_with_fallback_author() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 77),
            json!({
                "noticeTitle": "필독",
                "noticeContent": "content",
                "isFixed": true
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["isFixed"], true);
    assert_eq!(resp["memberName"], "관리자");
}

#[tokio::test]
async fn test_create_notice_forbidden_for_non_admin() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::new(USER_ROLE, 1),
            json!({
                "noticeTitle": "title",
                "noticeContent": "content"
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    let resp = resp.json_value().await;
    assert_eq!(resp["status"], 403);
    assert_eq!(resp["message"], "관리자만 접근할 수 있는 권한입니다.");
    assert!(resp["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_notice_role_is_case_sensitive() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .notices
        .create(
            &Caller::new("role_admin", 1),
            json!({
                "noticeTitle": "title",
                "noticeContent": "content"
            }),
        )
        .await;

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_create_notice_blank_title() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "   ",
                "noticeContent": "content"
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "제목은 비어있을 수 없습니다.");
}

#[tokio::test]
async fn test_create_notice_missing_content() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "title"
            }),
        )
        .await;

    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "내용은 비어있을 수 없습니다.");
}

#[tokio::test]
async fn test_create_notice_null_title() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": null,
                "noticeContent": "content"
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "제목은 비어있을 수 없습니다.");
}

#[tokio::test]
async fn test_create_notice_null_content() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "title",
                "noticeContent": null
            }),
        )
        .await;

    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "내용은 비어있을 수 없습니다.");
}

#[tokio::test]
async fn test_create_notice_missing_member_header() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .notices
        .create(
            &Caller::role(ADMIN_ROLE),
            json!({
                "noticeTitle": "title",
                "noticeContent": "content"
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "입력값이 올바르지 않습니다.");
}

#[tokio::test]
async fn test_create_notice_missing_role_header() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .notices
        .create(
            &Caller::default(),
            json!({
                "noticeTitle": "title",
                "noticeContent": "content"
            }),
        )
        .await;

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_create_notice_malformed_body() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "title",
                "noticeContent": "content",
                "isFixed": "yes"
            }),
        )
        .await;

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_create_then_get_notice() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let created = context
        .api
        .notices
        .create(
            &Caller::new(ADMIN_ROLE, 1),
            json!({
                "noticeTitle": "통합 테스트 제목",
                "noticeContent": "내용"
            }),
        )
        .await;
    assert_eq!(created.status(), 201);
    let id = NoticeId::from(created.json_value().await["noticeNo"].as_i64().unwrap());

    let resp = context.api.notices.get(id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["noticeTitle"], "통합 테스트 제목");
    assert!(context.db.notices.exists(id).await);
}

#[tokio::test]
async fn test_created_pinned_notice_listed_before_newer_one() {
    // GIVEN
    let context = TestContext::new().await;
    let admin = Caller::new(ADMIN_ROLE, 1);

    context
        .api
        .notices
        .create(
            &admin,
            json!({
                "noticeTitle": "pinned",
                "noticeContent": "content",
                "isFixed": true
            }),
        )
        .await;
    context
        .api
        .notices
        .create(
            &admin,
            json!({
                "noticeTitle": "newer",
                "noticeContent": "content"
            }),
        )
        .await;

    // WHEN
    let resp = context.api.notices.list("").await.json_value().await;

    // THEN
    assert_eq!(resp["content"][0]["noticeTitle"], "pinned");
    assert_eq!(resp["content"][1]["noticeTitle"], "newer");
}
