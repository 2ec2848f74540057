use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Principal;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Extension type to store the verified caller in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.user_id,
            role: self.role,
        }
    }
}

/// Middleware that validates the bearer token and adds the caller to request extensions.
///
/// Works from the token alone; the database is never consulted.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = authenticator.verify_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        let message = match e {
            JwtError::Expired => "Token has expired",
            _ => "Invalid token",
        };
        ApiError::Unauthorized(message.to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!("Token subject is not a user ID: {}", e);
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Middleware that only lets admins through. Must run after `authenticate`.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .copied()
        .ok_or_else(|| {
            tracing::error!("require_admin reached without an authenticated user");
            ApiError::Unauthorized("Authentication required".to_string()).into_response()
        })?;

    if !user.role.is_admin() {
        tracing::warn!(user_id = %user.user_id, "Non-admin rejected from admin route");
        return Err(ApiError::Forbidden("Admin access required".to_string()).into_response());
    }

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
