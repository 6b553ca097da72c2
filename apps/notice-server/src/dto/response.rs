use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use notice_core::service::error::{ErrorCode, ServiceError};
use serde::Serialize;

use super::error::ErrorResponseRestDTO;

pub(crate) enum ErrorResponse {
    BadRequest(ErrorResponseRestDTO),
    Forbidden(ErrorResponseRestDTO),
    NotFound(ErrorResponseRestDTO),
    ServerError(ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic() -> Self {
        Self::ServerError(ErrorResponseRestDTO::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Unmapped.msg(),
        ))
    }

    fn from_service_error(error: &ServiceError) -> Self {
        let message = error.error_code().msg();
        match error {
            ServiceError::EntityNotFound(_) => {
                Self::NotFound(ErrorResponseRestDTO::new(StatusCode::NOT_FOUND, message))
            }
            ServiceError::Forbidden(_) => {
                Self::Forbidden(ErrorResponseRestDTO::new(StatusCode::FORBIDDEN, message))
            }
            ServiceError::Validation(_) => {
                Self::BadRequest(ErrorResponseRestDTO::new(StatusCode::BAD_REQUEST, message))
            }
            ServiceError::Repository(_) | ServiceError::MappingError(_) | ServiceError::Other(_) => {
                Self::ServerError(ErrorResponseRestDTO::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                ))
            }
        }
    }

    #[track_caller]
    fn from_service_error_with_trace(error: ServiceError, action_description: &str) -> Self {
        let location = std::panic::Location::caller();
        let response = Self::from_service_error(&error);

        if matches!(response, Self::ServerError(_)) {
            tracing::error!(%error, %location, "Error while {action_description}");
        } else {
            tracing::debug!(%error, %location, "Rejected while {action_description}");
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
            Self::Forbidden(error) => (StatusCode::FORBIDDEN, Json(error)).into_response(),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, Json(error)).into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

pub(crate) enum CreatedOrErrorResponse<T> {
    Created(T),
    Error(ErrorResponse),
}

impl<T> CreatedOrErrorResponse<T> {
    pub fn created(value: impl Into<T>) -> Self {
        Self::Created(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::created(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for CreatedOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

pub(crate) enum EmptyOrErrorResponse {
    NoContent,
    Error(ErrorResponse),
}

impl EmptyOrErrorResponse {
    #[track_caller]
    pub(crate) fn from_result(result: Result<(), ServiceError>, action_description: &str) -> Self {
        match result {
            Ok(_) => Self::NoContent,
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                action_description,
            )),
        }
    }
}

impl IntoResponse for EmptyOrErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}
