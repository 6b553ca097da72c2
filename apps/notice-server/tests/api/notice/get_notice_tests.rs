use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::NoticeParams;
use time::macros::datetime;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_get_notice_success() {
    // GIVEN
    let context = TestContext::new().await;
    context.db.members.create(5, "이공지").await;
    let notice = context
        .db
        .notices
        .insert(NoticeParams {
            member_id: 5_i64.into(),
            title: "신규 기능 안내",
            content: "검색 기능이 추가되었습니다.",
            is_fixed: true,
            created_at: datetime!(2026-01-05 18:30:15.250 +09:00),
        })
        .await;

    // WHEN
    let resp = context.api.notices.get(notice.id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    assert_eq!(
        resp,
        serde_json::json!({
            "noticeNo": i64::from(notice.id),
            "noticeTitle": "신규 기능 안내",
            "noticeContent": "검색 기능이 추가되었습니다.",
            "isFixed": true,
            "memberName": "이공지",
            "createdAt": "2026-01-05T09:30:15.250Z",
        })
    );
}

#[tokio::test]
async fn test_get_notice_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.notices.get(999_i64).await;

    // THEN
    assert_eq!(resp.status(), 404);
    let resp = resp.json_value().await;
    assert_eq!(resp["status"], 404);
    assert_eq!(resp["message"], "존재하지 않는 공지사항입니다.");
}

#[tokio::test]
async fn test_get_notice_invalid_id() {
    let context = TestContext::new().await;

    let resp = context.api.notices.get_raw("abc").await;

    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "입력값이 올바르지 않습니다.");
}
