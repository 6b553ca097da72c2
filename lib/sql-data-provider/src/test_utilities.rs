use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{MemberId, NoticeId};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::{member, notice};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2026-01-05 09:30 UTC)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db_conn = db_conn(database_url, true).await.unwrap();
    DataLayer::build(db_conn)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

impl DataLayer {
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

pub struct NoticeParams<'a> {
    pub member_id: MemberId,
    pub title: &'a str,
    pub content: &'a str,
    pub is_fixed: bool,
    pub created_at: OffsetDateTime,
}

impl Default for NoticeParams<'_> {
    fn default() -> Self {
        Self {
            member_id: MemberId::from(1),
            title: "notice",
            content: "content",
            is_fixed: false,
            created_at: get_dummy_date(),
        }
    }
}

pub async fn insert_notice(
    db: &DatabaseConnection,
    params: NoticeParams<'_>,
) -> Result<NoticeId, DbErr> {
    let notice = notice::ActiveModel {
        member_no: Set(params.member_id),
        notice_title: Set(params.title.to_owned()),
        notice_content: Set(params.content.to_owned()),
        is_fixed: Set(params.is_fixed),
        created_at: Set(params.created_at),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(notice.notice_no)
}

pub async fn insert_member(
    db: &DatabaseConnection,
    id: MemberId,
    name: &str,
) -> Result<MemberId, DbErr> {
    let member = member::ActiveModel {
        member_no: Set(id),
        member_name: Set(name.to_owned()),
    }
    .insert(db)
    .await?;

    Ok(member.member_no)
}
