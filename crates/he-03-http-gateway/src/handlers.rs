//! Route handlers.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use he_01_item_store::ItemId;
use he_02_processing::HashProcessingApi;
use std::sync::Arc;
use tracing::debug;

use crate::domain::error::{ApiError, ApiResult, NOT_FOUND_MESSAGE, PASSWORD_REQUIRED_MESSAGE};
use crate::domain::types::{PasswordForm, StatsResponse};
use crate::shutdown::ShutdownTrigger;

/// State shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub processing: Arc<dyn HashProcessingApi>,
    pub shutdown: ShutdownTrigger,
}

/// `POST /hash`
///
/// Reads `password` from the form body, then from the query string.
/// A body that cannot be read (over the size limit) is answered directly.
pub async fn create_hash(
    State(state): State<GatewayState>,
    query: Option<Query<PasswordForm>>,
    form: Result<Form<PasswordForm>, FormRejection>,
) -> ApiResult<Response> {
    let from_body = match form {
        Ok(Form(f)) => f.into_password(),
        Err(FormRejection::BytesRejection(rejection)) => return Err(rejection.into()),
        Err(rejection) => {
            debug!(reason = %rejection, "[he-03] No usable form body");
            None
        }
    };

    let password = from_body
        .or_else(|| query.and_then(|Query(q)| q.into_password()))
        .ok_or_else(|| ApiError::validation(PASSWORD_REQUIRED_MESSAGE))?;

    let id = state.processing.submit(password).await?;
    debug!(item_id = %id, "[he-03] Hash request accepted");

    let location = HeaderValue::from_str(&format!("/hash/{}", id)).map_err(ApiError::internal)?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(id.as_u64()),
    )
        .into_response())
}

/// `GET /hash/:id`
pub async fn get_hash(
    State(state): State<GatewayState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<String>> {
    let id: u64 = raw_id
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid item id: {}", raw_id)))?;

    let digest = state.processing.retrieve(ItemId::new(id))?;
    Ok(Json(digest))
}

/// `GET /stats`
pub async fn get_stats(State(state): State<GatewayState>) -> Json<StatsResponse> {
    Json(state.processing.stats().into())
}

/// `POST /shutdown`
///
/// Answers 204 first; the trigger fires from a separate task.
pub async fn request_shutdown(State(state): State<GatewayState>) -> StatusCode {
    let trigger = state.shutdown.clone();
    tokio::spawn(async move {
        trigger.fire("http");
    });
    StatusCode::NO_CONTENT
}

/// Wrong method on a known path
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::method_not_allowed(&method)
}

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::not_found(NOT_FOUND_MESSAGE)
}
