use notice_core::service::notice::dto::{GetNoticeResponseDTO, UpdateNoticeRequestDTO};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::NoticeId;
use time::OffsetDateTime;

use crate::serialize::front_time;

/// Missing or `null` title and content are validated as blank
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CreateNoticeRequestRestDTO {
    #[serde(default, rename = "noticeTitle")]
    pub title: Option<String>,
    #[serde(default, rename = "noticeContent")]
    pub content: Option<String>,
    /// Unpinned when omitted
    #[serde(rename = "isFixed")]
    pub is_fixed: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, Into)]
#[into(UpdateNoticeRequestDTO)]
pub(crate) struct UpdateNoticeRequestRestDTO {
    #[serde(default, rename = "noticeTitle")]
    pub title: Option<String>,
    #[serde(default, rename = "noticeContent")]
    pub content: Option<String>,
    #[serde(default, rename = "isFixed")]
    pub is_fixed: Option<bool>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(GetNoticeResponseDTO)]
pub(crate) struct NoticeResponseRestDTO {
    #[serde(rename = "noticeNo")]
    pub id: NoticeId,
    #[serde(rename = "noticeTitle")]
    pub title: String,
    #[serde(rename = "noticeContent")]
    pub content: String,
    #[serde(rename = "isFixed")]
    pub is_fixed: bool,
    #[serde(rename = "memberName")]
    pub member_name: String,
    #[serde(rename = "createdAt", serialize_with = "front_time")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub(crate) struct NoticeListQueryParamsRest {
    /// zero-based
    pub page: u32,
    pub size: u32,
    pub keyword: Option<String>,
}

impl Default for NoticeListQueryParamsRest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            keyword: None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NoticePageResponseRestDTO {
    pub content: Vec<NoticeResponseRestDTO>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
    pub total_elements: u64,
}
