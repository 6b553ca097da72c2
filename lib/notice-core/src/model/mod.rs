pub mod common;
pub mod list_query;
pub mod member;
pub mod notice;
