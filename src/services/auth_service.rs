use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::{AdminConfig, TokenMode},
    dto::auth::{Claims, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
};

/// Check the submitted credentials against the configured admin account and hand out a token.
pub fn login(admin: &AdminConfig, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { username, password } = payload;
    if username != admin.username || password != admin.password {
        tracing::warn!(username = %username, "admin login rejected");
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(admin)?;
    tracing::info!(username = %username, "admin logged in");
    Ok(LoginResponse {
        success: true,
        token,
    })
}

pub fn issue_token(admin: &AdminConfig) -> AppResult<String> {
    match admin.token_mode {
        TokenMode::Static => Ok(admin.password.clone()),
        TokenMode::Signed => {
            let expiration = Utc::now()
                .checked_add_signed(Duration::hours(admin.token_ttl_hours))
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;
            let claims = Claims {
                sub: admin.username.clone(),
                exp: expiration.timestamp() as usize,
            };
            encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret(admin.token_secret.as_bytes()),
            )
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
        }
    }
}

/// Whether `credential` grants admin access under the configured token mode.
pub fn authorize(admin: &AdminConfig, credential: &str) -> bool {
    match admin.token_mode {
        TokenMode::Static => credential == admin.password,
        TokenMode::Signed => decode::<Claims>(
            credential,
            &DecodingKey::from_secret(admin.token_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims.sub == admin.username)
        .unwrap_or(false),
    }
}
