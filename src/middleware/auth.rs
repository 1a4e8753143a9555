use axum::extract::{FromRef, FromRequestParts};

use crate::{error::AppError, services::auth_service, state::AppState};

pub const ADMIN_AUTH_HEADER: &str = "x-admin-auth";

/// Proof that the request carried a valid admin credential in `x-admin-auth`.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

impl<S> FromRequestParts<S> for AdminGuard
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let credential = parts
            .headers
            .get(ADMIN_AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if !auth_service::authorize(&state.admin, credential) {
            tracing::warn!(uri = %parts.uri, "admin credential rejected");
            return Err(AppError::Unauthorized);
        }

        Ok(AdminGuard)
    }
}
