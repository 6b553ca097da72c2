use crate::transaction_context::TransactionManagerImpl;

pub mod repository;

pub(crate) struct MemberProvider {
    pub db: TransactionManagerImpl,
}
