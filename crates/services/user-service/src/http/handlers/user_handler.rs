//! User account handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tracing::info;

use common::{AppResult, BaseResponse};
use domain::{
    AuthenticatedUser, ChangePasswordRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest, User, UserId,
};

use crate::http::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/:id", get(get_user).put(update_profile).delete(delete_user))
        .route("/:id/password", put(change_password))
}

/// Register a new user; rejects a username that is already taken.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Response> {
    if state
        .accounts
        .find_by_username(&request.username)
        .await?
        .is_some()
    {
        info!(username = %request.username, "registration rejected: username taken");
        let body = BaseResponse::failure("CONFLICT", "Username is already taken");
        return Ok((StatusCode::CONFLICT, body).into_response());
    }

    let user = state.accounts.register(request).await?;
    Ok((StatusCode::CREATED, BaseResponse::success(user)).into_response())
}

/// Authenticate and return the user with a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<BaseResponse<AuthenticatedUser>> {
    let authenticated = state.accounts.authenticate(request).await?;
    Ok(BaseResponse::success(authenticated))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<BaseResponse<Vec<User>>> {
    let users = state.accounts.list_users().await?;
    Ok(BaseResponse::success(users))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<BaseResponse<User>> {
    let user = state.accounts.get_by_id(id).await?;
    Ok(BaseResponse::success(user))
}

/// Overwrite name, email and contact number
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<BaseResponse<User>> {
    let user = state
        .accounts
        .update_profile(id, request.name, request.email, request.contact_no)
        .await?;
    Ok(BaseResponse::success(user))
}

/// Replace the user's password
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(request): Json<ChangePasswordRequest>,
) -> AppResult<BaseResponse<User>> {
    let user = state.accounts.change_password(id, &request.password).await?;
    Ok(BaseResponse::success(user))
}

/// Delete a user, returning the users that remain
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<BaseResponse<Vec<User>>> {
    let remaining = state.accounts.delete_user(id).await?;
    Ok(BaseResponse::success(remaining))
}
