use autometrics::autometrics;
use notice_core::model::member::Member;
use notice_core::repository::error::DataLayerError;
use notice_core::repository::member_repository::MemberRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use shared_types::MemberId;

use super::MemberProvider;
use crate::entity::member;
use crate::mapper::to_data_layer_error;

impl From<member::Model> for Member {
    fn from(value: member::Model) -> Self {
        Self {
            id: value.member_no,
            name: value.member_name,
        }
    }
}

#[autometrics]
#[async_trait::async_trait]
impl MemberRepository for MemberProvider {
    async fn get_member(&self, id: &MemberId) -> Result<Option<Member>, DataLayerError> {
        let member = member::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(member.map(Member::from))
    }

    async fn get_members(&self, ids: &[MemberId]) -> Result<Vec<Member>, DataLayerError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let members = member::Entity::find()
            .filter(member::Column::MemberNo.is_in(ids))
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(members.into_iter().map(Member::from).collect())
    }
}
