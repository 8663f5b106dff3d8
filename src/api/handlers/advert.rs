//! Advert handlers: create, confirm, list, get.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{ConfirmAdvertRequest, CreateAdvertResponse};
use crate::app_state::AppState;
use crate::domain::{AdvertId, AdvertRecord, AdvertSubmission};
use crate::error::{AdvertError, ErrorResponse};

/// `POST /create`: Submit a new advert in the `Pending` state.
///
/// # Errors
///
/// Returns [`AdvertError`] on an invalid submission or a store failure. A
/// body that does not decode is reported as [`AdvertError::Invalid`].
#[utoipa::path(
    post,
    path = "/adverts/v1/create",
    tag = "Adverts",
    summary = "Create a pending advert",
    description = "Validates the submission, stores it as Pending and returns the assigned id. The advert is not visible as active until it is confirmed.",
    request_body = AdvertSubmission,
    responses(
        (status = 201, description = "Advert created", body = CreateAdvertResponse),
        (status = 400, description = "Invalid submission", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn create_advert(
    State(state): State<AppState>,
    payload: Result<Json<AdvertSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AdvertError> {
    let Json(submission) = payload?;
    let id = state.advert_service.create(submission).await?;
    Ok((StatusCode::CREATED, Json(CreateAdvertResponse { id })))
}

/// `PUT /confirm`: Activate or reject a pending advert.
///
/// # Errors
///
/// Returns [`AdvertError`] if the advert is unknown, the outcome is
/// unusable, or the store or notification fails.
#[utoipa::path(
    put,
    path = "/adverts/v1/confirm",
    tag = "Adverts",
    summary = "Confirm an advert",
    description = "Status `Active` records the uploaded file path, activates the advert and publishes one confirmation message. Status `Deleted` removes a pending advert.",
    request_body = ConfirmAdvertRequest,
    responses(
        (status = 200, description = "Confirmation applied"),
        (status = 400, description = "Malformed request or invalid outcome", body = ErrorResponse),
        (status = 404, description = "Advert not found", body = ErrorResponse),
        (status = 503, description = "Store or notification unavailable", body = ErrorResponse),
    )
)]
pub async fn confirm_advert(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmAdvertRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AdvertError> {
    let Json(req) = payload?;
    let (id, outcome) = req.into_parts()?;
    state.advert_service.confirm(&id, outcome).await?;
    Ok(StatusCode::OK)
}

/// `GET /all`: List every stored advert.
///
/// # Errors
///
/// Returns [`AdvertError`] if the store cannot be scanned.
#[utoipa::path(
    get,
    path = "/adverts/v1/all",
    tag = "Adverts",
    summary = "List adverts",
    description = "Returns every stored advert, pending and active, in no particular order.",
    responses(
        (status = 200, description = "All adverts", body = Vec<AdvertRecord>),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_adverts(State(state): State<AppState>) -> Result<impl IntoResponse, AdvertError> {
    let records = state.advert_service.get_all().await?;
    Ok(Json(records))
}

/// `GET /{id}`: Get one advert.
///
/// # Errors
///
/// Returns [`AdvertError::NotFound`] if no advert has this id.
#[utoipa::path(
    get,
    path = "/adverts/v1/{id}",
    tag = "Adverts",
    summary = "Get an advert",
    params(("id" = String, Path, description = "Advert identifier")),
    responses(
        (status = 200, description = "Advert found", body = AdvertRecord),
        (status = 404, description = "Advert not found", body = ErrorResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_advert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AdvertError> {
    let record = state.advert_service.get_by_id(&AdvertId::from(id)).await?;
    Ok(Json(record))
}

/// Advert routes, nested under `/adverts/v1` by the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_advert))
        .route("/confirm", put(confirm_advert))
        .route("/all", get(list_adverts))
        .route("/{id}", get(get_advert))
}
