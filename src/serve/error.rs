use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::prelude::*;

/// The error surface of the API, folded down to the two cases a client can
/// meaningfully distinguish.
pub enum ApiError {
    /// The request payload is missing, malformed, or fails a domain check.
    /// Maps to 422 with a detail message naming the problem.
    Validation(String),
    /// The rendering pipeline failed. Maps to 500 with a generic message;
    /// the underlying report is logged server-side only.
    Render(Report),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}

// Tell axum how to convert `ApiError` into a response. Errors never leave the
// process as raw reports - the client always sees a structured `detail` body.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, detail) = match self {
            Self::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            Self::Render(report) => {
                error!("Render pipeline failure: {report:?}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render the PDF.".to_string(),
                )
            }
        };

        (code, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

// This enables using `?` on functions that return `Result<_, Report>` inside
// handlers, without converting each error site by hand.
impl<E> From<E> for ApiError
where
    E: Into<Report>,
{
    fn from(err: E) -> Self {
        Self::Render(err.into())
    }
}

/// Drop-in replacement for [`axum::Json`] whose rejection shares the API error
/// shape, instead of axum's plain-text body.
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for Json<T>
where
    axum::Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> std::result::Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}
