use notice_core::model::notice::{CreateNoticeRequest, Notice, UpdateNoticeRequest};
use sea_orm::{NotSet, Set, Unchanged};
use time::OffsetDateTime;

use crate::entity::notice;

impl From<notice::Model> for Notice {
    fn from(value: notice::Model) -> Self {
        Self {
            id: value.notice_no,
            member_id: value.member_no,
            title: value.notice_title,
            content: value.notice_content,
            is_fixed: value.is_fixed,
            created_at: value.created_at,
        }
    }
}

pub(super) fn create_request_to_active_model(
    request: CreateNoticeRequest,
    created_at: OffsetDateTime,
) -> notice::ActiveModel {
    notice::ActiveModel {
        notice_no: NotSet,
        member_no: Set(request.member_id),
        notice_title: Set(request.title),
        notice_content: Set(request.content),
        is_fixed: Set(request.is_fixed),
        created_at: Set(created_at),
    }
}

impl From<UpdateNoticeRequest> for notice::ActiveModel {
    fn from(value: UpdateNoticeRequest) -> Self {
        Self {
            notice_no: Unchanged(value.id),
            notice_title: value.title.map(Set).unwrap_or_default(),
            notice_content: value.content.map(Set).unwrap_or_default(),
            is_fixed: value.is_fixed.map(Set).unwrap_or_default(),
            ..Default::default()
        }
    }
}
