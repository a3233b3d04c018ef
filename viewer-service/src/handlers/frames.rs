use crate::dtos::{FrameSubmission, TransformResponse, TransformStatus};
use crate::handlers::into_server_error;
use crate::services::metrics::record_frame_transformed;
use crate::startup::AppState;
use crate::utils::AppJson;
use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

pub async fn transform_frame(
    State(state): State<AppState>,
    AppJson(frame): AppJson<FrameSubmission>,
) -> Result<Json<TransformResponse>, AppError> {
    let transformer = state.transformer.name();
    let start = Instant::now();

    let transformed_frame = state.transformer.transform(&frame).await.map_err(|e| {
        tracing::warn!(
            avatar_id = %frame.avatar_id,
            transformer = transformer,
            error = %e,
            "Frame transformation failed"
        );
        into_server_error(e)
    })?;

    let elapsed = start.elapsed();
    record_frame_transformed(transformer, elapsed);

    tracing::info!(
        avatar_id = %frame.avatar_id,
        transformer = transformer,
        frame_timestamp = ?frame.timestamp,
        processing_time = elapsed.as_secs_f64(),
        "Frame transformed"
    );

    Ok(Json(TransformResponse {
        transformed_frame,
        processing_time: elapsed.as_secs_f64(),
        status: TransformStatus::Success,
    }))
}
