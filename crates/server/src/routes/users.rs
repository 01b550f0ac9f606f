use axum::extract::{Path, State};
use axum::http::StatusCode;

use models::{NewUser, User, UserPatch};

use crate::errors::ApiError;
use crate::extract::Json;
use crate::routes::parse_id;
use crate::state::AppState;

/// List all users in creation order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// Create a user; the store assigns the id.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    let user = state.users.create(input).await;
    (StatusCode::CREATED, Json(user))
}

/// Fetch one user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id::<User>(&id)?;
    Ok(Json(state.users.get(id).await?))
}

/// Merge the patch into the user; fields absent from the body are untouched.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id::<User>(&id)?;
    Ok(Json(state.users.update(id, patch).await?))
}

/// Delete one user by id.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<User>(&id)?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
