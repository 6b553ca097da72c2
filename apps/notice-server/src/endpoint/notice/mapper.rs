use notice_core::service::notice::dto::{
    CreateNoticeRequestDTO, GetNoticeListQueryDTO, GetNoticeListResponseDTO,
};
use one_dto_mapper::convert_inner;

use super::dto::{
    CreateNoticeRequestRestDTO, NoticeListQueryParamsRest, NoticePageResponseRestDTO,
};

impl From<CreateNoticeRequestRestDTO> for CreateNoticeRequestDTO {
    fn from(value: CreateNoticeRequestRestDTO) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            content: value.content.unwrap_or_default(),
            is_fixed: value.is_fixed,
        }
    }
}

impl From<NoticeListQueryParamsRest> for GetNoticeListQueryDTO {
    fn from(value: NoticeListQueryParamsRest) -> Self {
        Self {
            page: value.page,
            page_size: value.size,
            keyword: value.keyword,
        }
    }
}

impl NoticePageResponseRestDTO {
    pub(crate) fn from_list(list: GetNoticeListResponseDTO, page: u32, size: u32) -> Self {
        Self {
            content: convert_inner(list.values),
            page,
            size,
            total_pages: list.total_pages,
            total_elements: list.total_items,
        }
    }
}
