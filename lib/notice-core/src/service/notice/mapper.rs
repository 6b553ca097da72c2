use std::collections::HashMap;

use shared_types::MemberId;

use super::dto::{GetNoticeListResponseDTO, GetNoticeResponseDTO};
use crate::model::notice::{GetNoticeList, Notice};

pub(super) fn notice_to_response(notice: Notice, member_name: String) -> GetNoticeResponseDTO {
    GetNoticeResponseDTO {
        id: notice.id,
        member_id: notice.member_id,
        title: notice.title,
        content: notice.content,
        is_fixed: notice.is_fixed,
        member_name,
        created_at: notice.created_at,
    }
}

pub(super) fn notice_list_to_response(
    list: GetNoticeList,
    member_names: &HashMap<MemberId, String>,
    fallback_name: &str,
) -> GetNoticeListResponseDTO {
    GetNoticeListResponseDTO {
        values: list
            .values
            .into_iter()
            .map(|notice| {
                let member_name = member_names
                    .get(&notice.member_id)
                    .cloned()
                    .unwrap_or_else(|| fallback_name.to_owned());
                notice_to_response(notice, member_name)
            })
            .collect(),
        total_pages: list.total_pages,
        total_items: list.total_items,
    }
}
