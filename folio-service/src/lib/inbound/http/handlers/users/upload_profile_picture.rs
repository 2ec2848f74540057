use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::UserResponseData;
use crate::domain::user::models::ImageUpload;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UploadError;
use crate::user::errors::UserError;

/// Multipart field carrying the image.
pub const PROFILE_PICTURE_FIELD: &str = "profilePicture";

pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(PROFILE_PICTURE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        upload = Some(
            ImageUpload::new(
                file_name,
                content_type,
                bytes.to_vec(),
                state.max_upload_bytes,
            )
            .map_err(UserError::from)?,
        );
        break;
    }

    let upload = upload.ok_or(UserError::InvalidUpload(UploadError::Missing))?;

    state
        .user_service
        .upload_profile_picture(&caller.user_id, upload)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
