use crate::dtos::{AvatarListResponse, AvatarUploadResponse, UploadStatus};
use crate::services::metrics::record_avatar_upload;
use crate::startup::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use service_core::error::AppError;

/// Multipart part carrying the avatar image.
pub const FILE_FIELD: &str = "file";

pub async fn upload_avatar(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AvatarUploadResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|r| AppError::from_rejection(r.status(), r.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A plain form value under `file` is not an upload.
        let filename = field.file_name().map(str::to_string).ok_or_else(|| {
            AppError::UnprocessableEntity(anyhow::anyhow!(
                "Expected an uploaded file in field: {}",
                FILE_FIELD
            ))
        })?;

        // Held in memory only for hashing; nothing is written anywhere.
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;

        let avatar_id = state.avatar_ids.generate(&contents);
        record_avatar_upload(contents.len());

        tracing::info!(
            avatar_id = %avatar_id,
            filename = %filename,
            size = contents.len(),
            "Avatar uploaded"
        );

        return Ok(Json(AvatarUploadResponse {
            avatar_id,
            filename,
            status: UploadStatus::Uploaded,
        }));
    }

    Err(AppError::UnprocessableEntity(anyhow::anyhow!(
        "Field required: {}",
        FILE_FIELD
    )))
}

pub async fn list_avatars(State(state): State<AppState>) -> Json<AvatarListResponse> {
    Json(AvatarListResponse {
        avatars: state.catalog.list(),
    })
}
