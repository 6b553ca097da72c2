use std::collections::HashMap;

use futures::FutureExt;
use shared_types::{MemberId, NoticeId};

use super::NoticeService;
use super::dto::{
    CreateNoticeRequestDTO, GetNoticeListQueryDTO, GetNoticeListResponseDTO, GetNoticeResponseDTO,
    UpdateNoticeRequestDTO,
};
use super::mapper::{notice_list_to_response, notice_to_response};
use super::validator::{validate_create_request, validate_list_query, validate_update_request};
use crate::model::list_query::ListPagination;
use crate::model::notice::{CreateNoticeRequest, Notice, UpdateNoticeRequest};
use crate::service::error::{EntityNotFoundError, ForbiddenError, ServiceError};

impl NoticeService {
    /// Creates a new notice authored by `member_id`
    ///
    /// # Arguments
    ///
    /// * `request` - title, content and optional pinned flag (unpinned when omitted)
    /// * `role` - caller role, must be the administrator role
    /// * `member_id` - author of the notice
    pub async fn create_notice(
        &self,
        request: CreateNoticeRequestDTO,
        role: &str,
        member_id: MemberId,
    ) -> Result<GetNoticeResponseDTO, ServiceError> {
        self.ensure_admin(role)?;
        validate_create_request(&request, &self.config)?;

        let notice = self
            .notice_repository
            .create_notice(CreateNoticeRequest {
                member_id,
                title: request.title,
                content: request.content,
                is_fixed: request.is_fixed.unwrap_or(false),
            })
            .await?;

        tracing::info!("Created notice {} by member {member_id}", notice.id);
        self.notice_with_author(notice).await
    }

    /// Partially updates a notice, fields missing in `request` keep their stored value
    pub async fn update_notice(
        &self,
        id: &NoticeId,
        request: UpdateNoticeRequestDTO,
        role: &str,
    ) -> Result<GetNoticeResponseDTO, ServiceError> {
        self.ensure_admin(role)?;
        validate_update_request(&request, &self.config)?;

        let update = UpdateNoticeRequest {
            id: *id,
            title: request.title,
            content: request.content,
            is_fixed: request.is_fixed,
        };

        let notice = self
            .tx_manager
            .tx(async {
                let Some(notice) = self.notice_repository.get_notice(id).await? else {
                    return Err(EntityNotFoundError::Notice(*id).into());
                };

                self.notice_repository.update_notice(update.clone()).await?;

                Ok::<_, ServiceError>(notice.apply(update))
            }
            .boxed())
            .await??;

        tracing::info!("Updated notice {id}");
        self.notice_with_author(notice).await
    }

    /// Deletes a notice, failing if it does not exist
    pub async fn delete_notice(&self, id: &NoticeId, role: &str) -> Result<(), ServiceError> {
        self.ensure_admin(role)?;

        self.tx_manager
            .tx(async {
                if !self.notice_repository.notice_exists(id).await? {
                    return Err(EntityNotFoundError::Notice(*id).into());
                }

                self.notice_repository.delete_notice(id).await?;

                Ok::<_, ServiceError>(())
            }
            .boxed())
            .await??;

        tracing::info!("Deleted notice {id}");
        Ok(())
    }

    /// Returns details of a notice
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing notice
    pub async fn get_notice(&self, id: &NoticeId) -> Result<GetNoticeResponseDTO, ServiceError> {
        let Some(notice) = self.notice_repository.get_notice(id).await? else {
            return Err(EntityNotFoundError::Notice(*id).into());
        };

        self.notice_with_author(notice).await
    }

    /// Returns one page of notices, pinned ones first and the most recent first within each group.
    /// A non-blank `keyword` restricts the result to titles containing it.
    pub async fn get_notice_list(
        &self,
        query: GetNoticeListQueryDTO,
    ) -> Result<GetNoticeListResponseDTO, ServiceError> {
        validate_list_query(&query)?;

        let pagination = ListPagination {
            page: query.page,
            page_size: query.page_size,
        };

        let keyword = query
            .keyword
            .as_deref()
            .filter(|keyword| !keyword.trim().is_empty());

        let notices = match keyword {
            Some(keyword) => {
                self.notice_repository
                    .get_notice_list_by_title(keyword, pagination)
                    .await?
            }
            None => self.notice_repository.get_notice_list(pagination).await?,
        };

        let mut author_ids: Vec<MemberId> = notices
            .values
            .iter()
            .map(|notice| notice.member_id)
            .collect();
        author_ids.sort();
        author_ids.dedup();

        let member_names: HashMap<MemberId, String> = if author_ids.is_empty() {
            HashMap::new()
        } else {
            self.member_repository
                .get_members(&author_ids)
                .await?
                .into_iter()
                .map(|member| (member.id, member.name))
                .collect()
        };

        Ok(notice_list_to_response(
            notices,
            &member_names,
            &self.config.default_author_name,
        ))
    }

    fn ensure_admin(&self, role: &str) -> Result<(), ServiceError> {
        if !self.authorization_policy.is_admin(role) {
            return Err(ForbiddenError::NotAdmin {
                role: role.to_owned(),
            }
            .into());
        }

        Ok(())
    }

    async fn notice_with_author(&self, notice: Notice) -> Result<GetNoticeResponseDTO, ServiceError> {
        let member_name = self
            .member_repository
            .get_member(&notice.member_id)
            .await?
            .map(|member| member.name)
            .unwrap_or_else(|| self.config.default_author_name.to_owned());

        Ok(notice_to_response(notice, member_name))
    }
}
