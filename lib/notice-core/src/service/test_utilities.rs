use shared_types::{MemberId, NoticeId};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::model::member::Member;
use crate::model::notice::Notice;

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2026-01-05 09:30 UTC)
}

pub fn dummy_notice(id: i64, member_id: i64) -> Notice {
    Notice {
        id: NoticeId::from(id),
        member_id: MemberId::from(member_id),
        title: format!("notice {id}"),
        content: "content".to_owned(),
        is_fixed: false,
        created_at: get_dummy_date(),
    }
}

pub fn dummy_member(id: i64, name: &str) -> Member {
    Member {
        id: MemberId::from(id),
        name: name.to_owned(),
    }
}
