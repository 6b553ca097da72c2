mod macros;
mod member_id;
mod notice_id;

pub use member_id::MemberId;
pub use notice_id::NoticeId;
