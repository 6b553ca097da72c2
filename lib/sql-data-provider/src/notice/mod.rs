use crate::transaction_context::TransactionManagerImpl;

pub mod mapper;
pub mod repository;

pub(crate) struct NoticeProvider {
    pub db: TransactionManagerImpl,
}
