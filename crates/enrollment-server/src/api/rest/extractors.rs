//! Custom extractors
//!
//! [`ValidJson`] parses the body as JSON and runs it through the target
//! type's validator, so handlers only ever see typed, checked input.
//! [`RawId`] reads the single path parameter. Rejections from both go
//! through `ServerError` so clients always get the JSON envelope.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use enrollment_core::Validate;
use serde_json::{Map, Value};

/// JSON body validated into `T`
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: Validate,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            // A body without a JSON content type is treated as an empty object,
            // so validation reports the first missing field.
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
            Err(JsonRejection::JsonSyntaxError(err)) => {
                return Err(ServerError::InvalidRequest(format!("JSON syntax error: {}", err)));
            }
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(ServerError::PayloadTooLarge(rejection.body_text()));
            }
            Err(rejection) => {
                return Err(ServerError::InvalidRequest(format!(
                    "Failed to parse JSON: {}",
                    rejection
                )));
            }
        };

        T::validate(&value).map(Self).map_err(ServerError::from)
    }
}

/// Percent-decoded, not yet validated id from the route's only path parameter
pub struct RawId(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|rejection| ServerError::InvalidPath(rejection.body_text()))
    }
}
