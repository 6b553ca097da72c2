use similar_asserts::assert_eq;
use sql_data_provider::test_utilities::NoticeParams;
use time::Duration;
use time::macros::datetime;

use crate::utils::context::TestContext;

fn titles(resp: &serde_json::Value) -> Vec<&str> {
    resp["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|notice| notice["noticeTitle"].as_str().unwrap())
        .collect()
}

async fn insert(context: &TestContext, title: &str, is_fixed: bool, days_ago: i64) {
    context
        .db
        .notices
        .insert(NoticeParams {
            title,
            is_fixed,
            created_at: datetime!(2026-01-20 12:00 UTC) - Duration::days(days_ago),
            ..Default::default()
        })
        .await;
}

#[tokio::test]
async fn test_list_notices_pinned_first_then_recent() {
    // GIVEN
    let context = TestContext::new().await;
    insert(&context, "old", false, 3).await;
    insert(&context, "pinned old", true, 10).await;
    insert(&context, "newest", false, 0).await;
    insert(&context, "pinned new", true, 1).await;

    // WHEN
    let resp = context.api.notices.list("").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;

    assert_eq!(
        titles(&resp),
        vec!["pinned new", "pinned old", "newest", "old"]
    );
    assert_eq!(resp["page"], 0);
    assert_eq!(resp["size"], 10);
    assert_eq!(resp["totalPages"], 1);
    assert_eq!(resp["totalElements"], 4);
}

#[tokio::test]
async fn test_list_notices_pagination() {
    // GIVEN
    let context = TestContext::new().await;
    for day in 0..5 {
        insert(&context, &format!("day {day}"), false, day).await;
    }

    // WHEN
    let first = context.api.notices.list("page=0&size=2").await.json_value().await;
    let last = context.api.notices.list("page=2&size=2").await.json_value().await;
    let beyond = context.api.notices.list("page=9&size=2").await.json_value().await;

    // THEN
    assert_eq!(titles(&first), vec!["day 0", "day 1"]);
    assert_eq!(first["totalPages"], 3);
    assert_eq!(first["totalElements"], 5);

    assert_eq!(titles(&last), vec!["day 4"]);
    assert_eq!(last["page"], 2);

    assert!(titles(&beyond).is_empty());
    assert_eq!(beyond["totalElements"], 5);
}

#[tokio::test]
async fn test_list_notices_by_keyword() {
    // GIVEN
    let context = TestContext::new().await;
    insert(&context, "정기 점검 안내", false, 0).await;
    insert(&context, "이벤트 당첨자 발표", true, 0).await;
    insert(&context, "[필독] 긴급 점검", true, 5).await;

    // WHEN
    let resp = context
        .api
        .notices
        .list("keyword=%EC%A0%90%EA%B2%80")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(titles(&resp), vec!["[필독] 긴급 점검", "정기 점검 안내"]);
    assert_eq!(resp["totalElements"], 2);
}

#[tokio::test]
async fn test_list_notices_blank_keyword_lists_all() {
    let context = TestContext::new().await;
    insert(&context, "first", false, 1).await;
    insert(&context, "second", false, 0).await;

    let resp = context.api.notices.list("keyword=%20%20").await.json_value().await;

    assert_eq!(titles(&resp), vec!["second", "first"]);
}

#[tokio::test]
async fn test_list_notices_resolves_member_names() {
    // GIVEN
    let context = TestContext::new().await;
    context.db.members.create(10, "박작성").await;
    context
        .db
        .notices
        .insert(NoticeParams {
            member_id: 10_i64.into(),
            title: "known author",
            ..Default::default()
        })
        .await;
    context
        .db
        .notices
        .insert(NoticeParams {
            member_id: 20_i64.into(),
            title: "unknown author",
            is_fixed: true,
            ..Default::default()
        })
        .await;

    // WHEN
    let resp = context.api.notices.list("").await.json_value().await;

    // THEN
    assert_eq!(resp["content"][0]["memberName"], "관리자");
    assert_eq!(resp["content"][1]["memberName"], "박작성");
}

#[tokio::test]
async fn test_list_notices_empty() {
    let context = TestContext::new().await;

    let resp = context.api.notices.list("").await.json_value().await;

    assert!(titles(&resp).is_empty());
    assert_eq!(resp["totalPages"], 0);
    assert_eq!(resp["totalElements"], 0);
}

#[tokio::test]
async fn test_list_notices_invalid_page_size() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let zero = context.api.notices.list("size=0").await;
    let malformed = context.api.notices.list("page=-1").await;

    // THEN
    assert_eq!(zero.status(), 400);
    assert_eq!(
        zero.json_value().await["message"],
        "페이지 크기는 1 이상이어야 합니다."
    );
    assert_eq!(malformed.status(), 400);
}

#[tokio::test]
async fn test_list_notices_page_far_beyond_end() {
    // GIVEN
    let context = TestContext::new().await;
    insert(&context, "only", false, 0).await;

    // WHEN
    let resp = context
        .api
        .notices
        .list("page=4294967295&size=4294967295")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(titles(&resp).is_empty());
    assert_eq!(resp["totalElements"], 1);
    assert_eq!(resp["totalPages"], 1);
}
