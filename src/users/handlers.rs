use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::{cookie::CookieJar, WithRejection};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::AppError,
    session::{generate_token, session_cookie, Session},
    state::AppState,
    users::{
        dto::{RegisterRequest, UsersResponse},
        repo_types::NewUser,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register).get(list_users))
}

/// POST /users: creates the user and hands out a new session cookie.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<(StatusCode, CookieJar), AppError> {
    let name = payload.validated_name()?;

    let token = generate_token();
    let user = state
        .store
        .create_user(NewUser {
            id: Uuid::new_v4(),
            name,
            session_id: token.clone(),
        })
        .await?;

    info!(user_id = %user.id, "user registered");
    let jar = CookieJar::new().add(session_cookie(&state.config.session, token));
    Ok((StatusCode::CREATED, jar))
}

/// GET /users: the caller's own record.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<UsersResponse>, AppError> {
    let users = state
        .store
        .find_user(session.user_id)
        .await?
        .into_iter()
        .collect();
    Ok(Json(UsersResponse { users }))
}
