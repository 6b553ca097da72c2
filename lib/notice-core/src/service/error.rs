use shared_types::NoticeId;
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("Other error: `{0}`")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Notice `{0}` not found")]
    Notice(NoticeId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Notice title must not be blank")]
    BlankTitle,

    #[error("Notice title exceeds {max_length} characters")]
    TitleTooLong { max_length: usize },

    #[error("Notice content must not be blank")]
    BlankContent,

    #[error("Page size must not be less than one")]
    InvalidPageSize,
}

#[derive(Debug, Error)]
pub enum ForbiddenError {
    #[error("Role `{role}` is not allowed to modify notices")]
    NotAdmin { role: String },
}

/// Classification of errors, carrying the message that is safe to show to callers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    NoticeNotFound,
    BlankTitle,
    TitleTooLong,
    BlankContent,
    InvalidPageSize,
    AdminOnly,
    Database,
    ResponseMapping,
    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::NoticeNotFound => "존재하지 않는 공지사항입니다.",

            ErrorCode::BlankTitle => "제목은 비어있을 수 없습니다.",
            ErrorCode::TitleTooLong => "제목이 허용된 길이를 초과했습니다.",
            ErrorCode::BlankContent => "내용은 비어있을 수 없습니다.",
            ErrorCode::InvalidPageSize => "페이지 크기는 1 이상이어야 합니다.",

            ErrorCode::AdminOnly => "관리자만 접근할 수 있는 권한입니다.",

            ErrorCode::Database | ErrorCode::ResponseMapping | ErrorCode::Unmapped => {
                "서버 내부 오류가 발생했습니다."
            }
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Forbidden(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::MappingError(_) => ErrorCode::ResponseMapping,
            ServiceError::Other(_) => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Notice(_) => ErrorCode::NoticeNotFound,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::BlankTitle => ErrorCode::BlankTitle,
            Self::TitleTooLong { .. } => ErrorCode::TitleTooLong,
            Self::BlankContent => ErrorCode::BlankContent,
            Self::InvalidPageSize => ErrorCode::InvalidPageSize,
        }
    }
}

impl ForbiddenError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotAdmin { .. } => ErrorCode::AdminOnly,
        }
    }
}
