pub mod member;
pub mod notice;
