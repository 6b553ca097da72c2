use super::dto::{CreateNoticeRequestDTO, GetNoticeListQueryDTO, UpdateNoticeRequestDTO};
use crate::config::core_config::NoticeConfig;
use crate::service::error::ValidationError;

// title is checked before content, so the first violated field is reported
pub(super) fn validate_create_request(
    request: &CreateNoticeRequestDTO,
    config: &NoticeConfig,
) -> Result<(), ValidationError> {
    validate_title(&request.title, config.title_max_length)?;
    validate_content(&request.content)
}

pub(super) fn validate_update_request(
    request: &UpdateNoticeRequestDTO,
    config: &NoticeConfig,
) -> Result<(), ValidationError> {
    if let Some(title) = &request.title {
        validate_title(title, config.title_max_length)?;
    }

    if let Some(content) = &request.content {
        validate_content(content)?;
    }

    Ok(())
}

pub(super) fn validate_list_query(query: &GetNoticeListQueryDTO) -> Result<(), ValidationError> {
    if query.page_size == 0 {
        return Err(ValidationError::InvalidPageSize);
    }

    Ok(())
}

fn validate_title(title: &str, max_length: usize) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::BlankTitle);
    }

    if title.chars().count() > max_length {
        return Err(ValidationError::TitleTooLong { max_length });
    }

    Ok(())
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::BlankContent);
    }

    Ok(())
}
