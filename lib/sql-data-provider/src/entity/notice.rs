use sea_orm::entity::prelude::*;
use shared_types::{MemberId, NoticeId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub notice_no: NoticeId,
    pub member_no: MemberId,
    pub notice_title: String,
    #[sea_orm(column_type = "Text")]
    pub notice_content: String,
    pub is_fixed: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
