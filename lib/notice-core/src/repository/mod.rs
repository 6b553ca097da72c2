use std::sync::Arc;

use member_repository::MemberRepository;
use notice_repository::NoticeRepository;

use crate::proto::transaction_manager::TransactionManager;

pub mod error;
pub mod member_repository;
pub mod notice_repository;

pub trait DataRepository: Send + Sync {
    fn get_notice_repository(&self) -> Arc<dyn NoticeRepository>;
    fn get_member_repository(&self) -> Arc<dyn MemberRepository>;
    fn get_transaction_manager(&self) -> Arc<dyn TransactionManager>;
}
