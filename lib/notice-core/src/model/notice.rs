use shared_types::{MemberId, NoticeId};
use time::OffsetDateTime;

use super::common::GetListResponse;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub member_id: MemberId,
    pub title: String,
    pub content: String,
    pub is_fixed: bool,
    pub created_at: OffsetDateTime,
}

pub type GetNoticeList = GetListResponse<Notice>;

/// Insert path of the store; id and `created_at` are assigned there
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateNoticeRequest {
    pub member_id: MemberId,
    pub title: String,
    pub content: String,
    pub is_fixed: bool,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateNoticeRequest {
    pub id: NoticeId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_fixed: Option<bool>,
}

impl Notice {
    pub fn apply(self, update: UpdateNoticeRequest) -> Self {
        Self {
            title: update.title.unwrap_or(self.title),
            content: update.content.unwrap_or(self.content),
            is_fixed: update.is_fixed.unwrap_or(self.is_fixed),
            ..self
        }
    }
}
