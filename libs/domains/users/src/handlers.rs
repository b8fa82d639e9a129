use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, ErrorResponse, IdPath, InternalErrorResponse, ValidatedJson,
    ValidationErrorResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{User, UserPayload};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(
        User,
        UserPayload,
        ErrorResponse,
        ValidationErrorResponse,
        InternalErrorResponse
    )),
    tags((name = TAG, description = "User management endpoints"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<User>>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Json<ApiResponse<Vec<User>>> {
    let users = service.get_all_users().await;
    Json(ApiResponse::collection(users, "Users retrieved successfully"))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<User>),
        (status = 400, description = "Invalid payload or duplicate email", body = ValidationErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(payload.into_create()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user, "User created successfully")),
    ))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<User>),
        (status = 400, description = "Invalid ID", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<ApiResponse<User>>> {
    let user = service.get_user(id).await?;
    Ok(Json(ApiResponse::success(user, "User retrieved successfully")))
}

/// Replace a user's fields
///
/// The id is checked before the body, and the body must pass the same
/// validation as on create.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<User>),
        (status = 400, description = "Invalid ID, payload or duplicate email", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> UserResult<Json<ApiResponse<User>>> {
    let user = service.update_user(id, payload.into_update()).await?;
    Ok(Json(ApiResponse::success(user, "User updated successfully")))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = ApiResponse<User>),
        (status = 400, description = "Invalid ID", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<ApiResponse<User>>> {
    let user = service.delete_user(id).await?;
    Ok(Json(ApiResponse::success(user, "User deleted successfully")))
}
