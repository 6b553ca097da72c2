use shared_types::MemberId;

use super::error::DataLayerError;
use crate::model::member::Member;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait MemberRepository: Send + Sync {
    async fn get_member(&self, id: &MemberId) -> Result<Option<Member>, DataLayerError>;

    /// Unknown ids are skipped
    async fn get_members(&self, ids: &[MemberId]) -> Result<Vec<Member>, DataLayerError>;
}
