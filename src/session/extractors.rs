use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// Resolved owner of the request, taken from the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|c| c.value().to_owned())
            .filter(|v| !v.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .store
            .find_user_by_session(&token)
            .await?
            .ok_or_else(|| {
                warn!("session cookie does not match any user");
                AppError::UnprocessableState
            })?;

        Ok(Session { user_id: user.id })
    }
}
