use shared_types::NoticeId;

use super::error::DataLayerError;
use crate::model::list_query::ListPagination;
use crate::model::notice::{CreateNoticeRequest, GetNoticeList, Notice, UpdateNoticeRequest};

/// Storage of notices. Both listings order pinned notices first, then the most recent ones.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create_notice(&self, request: CreateNoticeRequest) -> Result<Notice, DataLayerError>;

    async fn get_notice(&self, id: &NoticeId) -> Result<Option<Notice>, DataLayerError>;

    async fn notice_exists(&self, id: &NoticeId) -> Result<bool, DataLayerError>;

    async fn update_notice(&self, request: UpdateNoticeRequest) -> Result<(), DataLayerError>;

    async fn delete_notice(&self, id: &NoticeId) -> Result<(), DataLayerError>;

    async fn get_notice_list(
        &self,
        pagination: ListPagination,
    ) -> Result<GetNoticeList, DataLayerError>;

    /// Substring match on the title
    async fn get_notice_list_by_title(
        &self,
        keyword: &str,
        pagination: ListPagination,
    ) -> Result<GetNoticeList, DataLayerError>;
}
