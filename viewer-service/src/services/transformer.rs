use crate::dtos::FrameSubmission;
use async_trait::async_trait;
use service_core::error::AppError;

/// Turns a submitted frame into the frame sent back to the client.
///
/// Implementations receive the still-encoded `frame_data` and return the
/// encoded result. Errors surface to the client as a 500 with the error text.
#[async_trait]
pub trait FrameTransformer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn transform(&self, frame: &FrameSubmission) -> Result<String, AppError>;
}

/// Returns the input frame untouched. Stands in until a model is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTransformer;

impl PassthroughTransformer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FrameTransformer for PassthroughTransformer {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    async fn transform(&self, frame: &FrameSubmission) -> Result<String, AppError> {
        tracing::debug!(
            avatar_id = %frame.avatar_id,
            frame_len = frame.frame_data.len(),
            "Passing frame through unchanged"
        );
        Ok(frame.frame_data.clone())
    }
}
