use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// `Json<T>` whose rejections use the service error envelope.
///
/// Shape problems are turned away here, before the handler body runs:
/// wrong or missing fields give 422, malformed JSON 400, and a missing
/// `application/json` content type 415.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                AppError::from_rejection(rejection.status(), rejection.body_text())
            })?;

        Ok(AppJson(value))
    }
}
