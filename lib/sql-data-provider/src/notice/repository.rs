use autometrics::autometrics;
use notice_core::model::list_query::ListPagination;
use notice_core::model::notice::{CreateNoticeRequest, GetNoticeList, Notice, UpdateNoticeRequest};
use notice_core::repository::error::DataLayerError;
use notice_core::repository::notice_repository::NoticeRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use shared_types::NoticeId;
use time::OffsetDateTime;

use super::NoticeProvider;
use super::mapper::create_request_to_active_model;
use crate::common::calculate_pages_count;
use crate::entity::notice;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl NoticeProvider {
    async fn get_page(
        &self,
        query: Select<notice::Entity>,
        pagination: ListPagination,
    ) -> Result<GetNoticeList, DataLayerError> {
        let total_items = query
            .clone()
            .count(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        let page_size = pagination.page_size as u64;
        let total_pages = calculate_pages_count(total_items, page_size);

        // offsets are bound as signed 64-bit integers, anything larger is past the last row
        let Some(offset) = (pagination.page as u64)
            .checked_mul(page_size)
            .filter(|offset| i64::try_from(*offset).is_ok())
        else {
            return Ok(GetNoticeList {
                values: vec![],
                total_pages,
                total_items,
            });
        };

        let notices = query
            .order_by_desc(notice::Column::IsFixed)
            .order_by_desc(notice::Column::CreatedAt)
            .order_by_desc(notice::Column::NoticeNo)
            .offset(offset)
            .limit(page_size)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetNoticeList {
            values: convert_inner(notices),
            total_pages,
            total_items,
        })
    }
}

#[autometrics]
#[async_trait::async_trait]
impl NoticeRepository for NoticeProvider {
    async fn create_notice(&self, request: CreateNoticeRequest) -> Result<Notice, DataLayerError> {
        let now = OffsetDateTime::now_utc();
        // stored with millisecond precision
        let created_at = now
            .replace_nanosecond(now.millisecond() as u32 * 1_000_000)
            .map_err(|e| DataLayerError::Db(e.into()))?;

        let notice = create_request_to_active_model(request, created_at)
            .insert(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(notice.into())
    }

    async fn get_notice(&self, id: &NoticeId) -> Result<Option<Notice>, DataLayerError> {
        let notice = notice::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(notice))
    }

    async fn notice_exists(&self, id: &NoticeId) -> Result<bool, DataLayerError> {
        let count = notice::Entity::find_by_id(id)
            .count(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(count > 0)
    }

    async fn update_notice(&self, request: UpdateNoticeRequest) -> Result<(), DataLayerError> {
        if request.title.is_none() && request.content.is_none() && request.is_fixed.is_none() {
            return match self.notice_exists(&request.id).await? {
                true => Ok(()),
                false => Err(DataLayerError::RecordNotUpdated),
            };
        }

        notice::ActiveModel::from(request)
            .update(&self.db.tx())
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete_notice(&self, id: &NoticeId) -> Result<(), DataLayerError> {
        notice::Entity::delete_by_id(id)
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(())
    }

    async fn get_notice_list(
        &self,
        pagination: ListPagination,
    ) -> Result<GetNoticeList, DataLayerError> {
        self.get_page(notice::Entity::find(), pagination).await
    }

    async fn get_notice_list_by_title(
        &self,
        keyword: &str,
        pagination: ListPagination,
    ) -> Result<GetNoticeList, DataLayerError> {
        let query = notice::Entity::find().filter(notice::Column::NoticeTitle.contains(keyword));

        self.get_page(query, pagination).await
    }
}
