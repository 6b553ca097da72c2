pub mod misc;
pub mod notice;
