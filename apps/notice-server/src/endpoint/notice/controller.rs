use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::TypedHeader;
use axum_extra::extract::WithRejection;
use shared_types::NoticeId;

use super::dto::{
    CreateNoticeRequestRestDTO, NoticeListQueryParamsRest, NoticePageResponseRestDTO,
    NoticeResponseRestDTO, UpdateNoticeRequestRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse};
use crate::extractor::{XMemberNo, XRole};
use crate::router::AppState;

pub(crate) async fn post_notice(
    state: State<AppState>,
    WithRejection(TypedHeader(XRole(role)), _): WithRejection<
        TypedHeader<XRole>,
        ErrorResponseRestDTO,
    >,
    WithRejection(TypedHeader(XMemberNo(member_id)), _): WithRejection<
        TypedHeader<XMemberNo>,
        ErrorResponseRestDTO,
    >,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateNoticeRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<NoticeResponseRestDTO> {
    let result = state
        .core
        .notice_service
        .create_notice(request.into(), &role, member_id)
        .await;

    CreatedOrErrorResponse::from_result(result, "creating notice")
}

pub(crate) async fn patch_notice(
    state: State<AppState>,
    WithRejection(Path(notice_no), _): WithRejection<Path<NoticeId>, ErrorResponseRestDTO>,
    WithRejection(TypedHeader(XRole(role)), _): WithRejection<
        TypedHeader<XRole>,
        ErrorResponseRestDTO,
    >,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateNoticeRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<NoticeResponseRestDTO> {
    let result = state
        .core
        .notice_service
        .update_notice(&notice_no, request.into(), &role)
        .await;

    OkOrErrorResponse::from_result(result, "updating notice")
}

pub(crate) async fn delete_notice(
    state: State<AppState>,
    WithRejection(Path(notice_no), _): WithRejection<Path<NoticeId>, ErrorResponseRestDTO>,
    WithRejection(TypedHeader(XRole(role)), _): WithRejection<
        TypedHeader<XRole>,
        ErrorResponseRestDTO,
    >,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .notice_service
        .delete_notice(&notice_no, &role)
        .await;

    EmptyOrErrorResponse::from_result(result, "deleting notice")
}

pub(crate) async fn get_notice(
    state: State<AppState>,
    WithRejection(Path(notice_no), _): WithRejection<Path<NoticeId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<NoticeResponseRestDTO> {
    let result = state.core.notice_service.get_notice(&notice_no).await;

    OkOrErrorResponse::from_result(result, "getting notice")
}

pub(crate) async fn get_notice_list(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<NoticeListQueryParamsRest>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<NoticePageResponseRestDTO> {
    let (page, size) = (query.page, query.size);
    let result = state
        .core
        .notice_service
        .get_notice_list(query.into())
        .await
        .map(|list| NoticePageResponseRestDTO::from_list(list, page, size));

    OkOrErrorResponse::from_result(result, "listing notices")
}
