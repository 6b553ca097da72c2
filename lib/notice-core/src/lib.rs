use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use proto::authorization::RoleAuthorizationPolicy;
use repository::DataRepository;
use service::notice::NoticeService;

pub mod config;
pub mod model;
pub mod proto;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct NoticeCore {
    pub notice_service: NoticeService,
}

impl NoticeCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        core_config: CoreConfig,
    ) -> Result<Self, ConfigValidationError> {
        core_config.validate()?;

        let notice_config = Arc::new(core_config.notice);
        let authorization_policy = Arc::new(RoleAuthorizationPolicy::new(
            notice_config.admin_role.to_owned(),
        ));

        Ok(Self {
            notice_service: NoticeService::new(
                data_provider.get_notice_repository(),
                data_provider.get_member_repository(),
                authorization_policy,
                data_provider.get_transaction_manager(),
                notice_config,
            ),
        })
    }
}
