use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::blog::errors::BlogError;
use crate::project::errors::ProjectError;
use crate::user::errors::UserError;

pub mod blogs;
pub mod health;
pub mod projects;
pub mod users;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    /// Duplicate resource. Reported as 400, not 409.
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        message: "Internal server error".to_string(),
                        error: Some(detail),
                    },
                )
            }
            ApiError::BadRequest(msg) | ApiError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, ApiErrorBody::new(msg))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorBody::new(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorBody::new(msg)),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiErrorBody::new(msg)),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::EmptyPassword
            | UserError::InvalidUpload(_) => ApiError::BadRequest(err.to_string()),
            UserError::Hashing(_)
            | UserError::TokenIssue(_)
            | UserError::ImageStore(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BlogError::NotOwner { .. } => {
                ApiError::Forbidden("You can only delete your own blogs".to_string())
            }
            BlogError::InvalidBlogId(_)
            | BlogError::InvalidContent(_)
            | BlogError::EmptySearchQuery => ApiError::BadRequest(err.to_string()),
            BlogError::DatabaseError(_) | BlogError::AuthorLookup(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::InvalidType(_) | ProjectError::InvalidContent(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ProjectError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

/// Error payload: a human-readable message, plus the underlying error for 500s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    fn new(message: String) -> Self {
        Self {
            message,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;
    use crate::domain::blog::models::BlogId;
    use crate::domain::project::errors::ProjectTypeError;
    use crate::domain::user::models::UserId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let response = ApiSuccess::new(StatusCode::CREATED, "ok").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["status_code"], 201);
        assert_eq!(body["data"], "ok");
    }

    #[tokio::test]
    async fn test_internal_error_carries_detail() {
        let response = ApiError::InternalServerError("pool timed out".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "pool timed out");
    }

    #[tokio::test]
    async fn test_client_error_has_no_detail() {
        let response = ApiError::Unauthorized("Invalid credentials".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_duplicate_email_is_bad_request() {
        let err = ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_error_mapping() {
        assert_eq!(
            ApiError::from(BlogError::NotOwner {
                blog_id: BlogId::new(),
                user_id: UserId::new(),
            })
            .into_response()
            .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(BlogError::NotFound(BlogId::new()))
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ProjectError::from(ProjectTypeError(Some(4)))),
            ApiError::BadRequest("Invalid project type. Must be 1, 2, or 3.".to_string())
        );
    }
}
