use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvatarListResponse {
    pub avatars: Vec<AvatarSummary>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploaded,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvatarUploadResponse {
    pub avatar_id: String,
    /// Name the client gave the file part.
    pub filename: String,
    pub status: UploadStatus,
}
