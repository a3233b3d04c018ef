use serde::{Deserialize, Serialize};

/// A single video frame sent for transformation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSubmission {
    /// Base64-encoded image. Not decoded by the passthrough path.
    pub frame_data: String,
    /// Target avatar. Not checked against the catalog.
    pub avatar_id: String,
    #[serde(default)]
    pub timestamp: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransformStatus {
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformResponse {
    pub transformed_frame: String,
    /// Seconds spent in the transformer.
    pub processing_time: f64,
    pub status: TransformStatus,
}
