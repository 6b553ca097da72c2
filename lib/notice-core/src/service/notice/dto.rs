use shared_types::{MemberId, NoticeId};
use time::OffsetDateTime;

use crate::model::common::GetListResponse;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateNoticeRequestDTO {
    pub title: String,
    pub content: String,
    pub is_fixed: Option<bool>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateNoticeRequestDTO {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_fixed: Option<bool>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetNoticeResponseDTO {
    pub id: NoticeId,
    pub member_id: MemberId,
    pub title: String,
    pub content: String,
    pub is_fixed: bool,
    pub member_name: String,
    pub created_at: OffsetDateTime,
}

pub type GetNoticeListResponseDTO = GetListResponse<GetNoticeResponseDTO>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetNoticeListQueryDTO {
    /// zero-based
    pub page: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
}
