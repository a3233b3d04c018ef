pub mod avatars;
pub mod frames;
pub mod health;

pub use avatars::{list_avatars, upload_avatar};
pub use frames::transform_frame;
pub use health::{metrics_endpoint, root};

use service_core::error::AppError;

/// Failures raised after a request has been accepted all leave as a 500
/// carrying the error text, whatever their original kind.
pub(crate) fn into_server_error(err: AppError) -> AppError {
    match err {
        AppError::InternalError(_) => err,
        other => AppError::InternalError(anyhow::Error::new(other)),
    }
}
