use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;

use crate::{
    dto::question_dto::CreateQuestionPayload,
    error::{Error, Result},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/questions",
    params(
        ("id" = Option<String>, Query, description = "Question ID; omit to list all questions")
    ),
    responses(
        (status = 200, description = "Question(s) returned"),
        (status = 404, description = "No question matches the given id")
    )
)]
#[axum::debug_handler]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response> {
    // An empty `id=` counts as absent, same as no parameter at all.
    match query.id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let record = state.question_service.get(&id).await?;
            Ok(Json(json!({ "success": true, "data": record })).into_response())
        }
        None => {
            let questions = state.question_service.list_all().await?;
            Ok(Json(json!({
                "success": true,
                "count": questions.len(),
                "data": questions,
            }))
            .into_response())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/questions",
    responses(
        (status = 201, description = "Question saved"),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    // Parsed by hand rather than via the Json extractor: a malformed body is
    // an unhandled failure (500), not a validation error.
    let payload: CreateQuestionPayload = serde_json::from_slice(&body)?;
    let created = state.question_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "question saved successfully",
            "data": created,
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/questions",
    params(
        ("id" = String, Query, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 400, description = "Missing id")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<impl IntoResponse> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::BadRequest("missing id".to_string()))?;
    state.question_service.delete(&id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "question deleted successfully",
    })))
}

/// CORS preflight: empty body, headers come from the middleware.
#[axum::debug_handler]
pub async fn preflight() -> impl IntoResponse {
    StatusCode::OK
}

/// Fallback for the method router, so PUT and friends get the JSON 405 body
/// instead of axum's empty default.
#[axum::debug_handler]
pub async fn method_not_supported() -> Error {
    Error::MethodNotSupported
}
