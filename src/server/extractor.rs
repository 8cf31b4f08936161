//! Axum extractor for request payloads
//!
//! Reads the raw body and unwraps its `data` object. Unlike `Json<T>`, it does
//! not insist on a `Content-Type` header and accepts an empty body, which
//! yields an empty payload so the validation chain reports the first missing
//! field instead of a transport error.

use crate::core::{Payload, RequestError, ServiceError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ServiceError::Request(RequestError::InvalidBody {
                message: e.to_string(),
            })
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload::empty());
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(Payload::from_body(body))
    }
}
