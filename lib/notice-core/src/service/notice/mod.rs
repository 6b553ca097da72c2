use std::sync::Arc;

use crate::config::core_config::NoticeConfig;
use crate::proto::authorization::AuthorizationPolicy;
use crate::proto::transaction_manager::TransactionManager;
use crate::repository::member_repository::MemberRepository;
use crate::repository::notice_repository::NoticeRepository;

pub mod dto;
mod mapper;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct NoticeService {
    notice_repository: Arc<dyn NoticeRepository>,
    member_repository: Arc<dyn MemberRepository>,
    authorization_policy: Arc<dyn AuthorizationPolicy>,
    tx_manager: Arc<dyn TransactionManager>,
    config: Arc<NoticeConfig>,
}

impl NoticeService {
    pub fn new(
        notice_repository: Arc<dyn NoticeRepository>,
        member_repository: Arc<dyn MemberRepository>,
        authorization_policy: Arc<dyn AuthorizationPolicy>,
        tx_manager: Arc<dyn TransactionManager>,
        config: Arc<NoticeConfig>,
    ) -> Self {
        Self {
            notice_repository,
            member_repository,
            authorization_policy,
            tx_manager,
            config,
        }
    }
}
