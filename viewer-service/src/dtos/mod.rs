pub mod avatars;
pub mod frames;

pub use avatars::{AvatarListResponse, AvatarSummary, AvatarUploadResponse, UploadStatus};
pub use frames::{FrameSubmission, TransformResponse, TransformStatus};
