use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::typed_header::TypedHeaderRejection;
use serde::Serialize;
use time::OffsetDateTime;

use crate::serialize::front_time;

const INPUT_VALIDATION_MESSAGE: &str = "입력값이 올바르지 않습니다.";

#[derive(Debug, Serialize)]
pub struct ErrorResponseRestDTO {
    pub status: u16,
    pub message: String,
    #[serde(serialize_with = "front_time")]
    pub timestamp: OffsetDateTime,
}

impl ErrorResponseRestDTO {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    fn input_validation(cause: impl std::fmt::Display) -> Self {
        tracing::debug!("Rejected request: {cause}");
        Self::new(StatusCode::BAD_REQUEST, INPUT_VALIDATION_MESSAGE)
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self)).into_response()
    }
}

impl From<TypedHeaderRejection> for ErrorResponseRestDTO {
    fn from(value: TypedHeaderRejection) -> Self {
        Self::input_validation(format!("{} header {:?}", value.name(), value.reason()))
    }
}

macro_rules! gen_from_rejection {
    ($from:ty, $rejection:ty ) => {
        impl From<$from> for $rejection {
            fn from(value: $from) -> Self {
                Self::input_validation(value.body_text())
            }
        }
    };
}

gen_from_rejection!(JsonRejection, ErrorResponseRestDTO);
gen_from_rejection!(QueryRejection, ErrorResponseRestDTO);
gen_from_rejection!(PathRejection, ErrorResponseRestDTO);
