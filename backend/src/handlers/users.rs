use axum::{extract::State, http::StatusCode, Json};
use shared::api::{ListUsersResponse, UserInput};
use shared::models::User;

use crate::error::{ApiError, ApiResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::routes::AppState;

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<ListUsersResponse>> {
    let users = state.users.list().await?;
    Ok(Json(ListUsersResponse {
        total: users.len(),
        users,
    }))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.users.create(input).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<Json<User>> {
    state
        .users
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}

pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UserInput>,
) -> ApiResult<Json<User>> {
    state
        .users
        .update(id, input)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}

pub async fn delete_user(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    if !state.users.delete(id).await? {
        return Err(ApiError::not_found("User"));
    }
    Ok(StatusCode::NO_CONTENT)
}
