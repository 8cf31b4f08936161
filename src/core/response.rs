//! Success signals returned by resource handlers

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// Result of a successful handler call
///
/// The REST layer wraps any body as `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A new entity was appended to the store (201)
    Created(T),
    /// Plain success with a body (200)
    Ok(T),
    /// Success without a body (204)
    NoContent,
}

impl<T> Outcome<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Outcome::Created(_) => StatusCode::CREATED,
            Outcome::Ok(_) => StatusCode::OK,
            Outcome::NoContent => StatusCode::NO_CONTENT,
        }
    }

    /// Borrow the body, if any
    pub fn body(&self) -> Option<&T> {
        match self {
            Outcome::Created(body) | Outcome::Ok(body) => Some(body),
            Outcome::NoContent => None,
        }
    }

    /// Take the body, if any
    pub fn into_body(self) -> Option<T> {
        match self {
            Outcome::Created(body) | Outcome::Ok(body) => Some(body),
            Outcome::NoContent => None,
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.into_body() {
            Some(body) => (status, Json(json!({ "data": body }))).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Outcome::Created(1).status_code(), StatusCode::CREATED);
        assert_eq!(Outcome::Ok(1).status_code(), StatusCode::OK);
        assert_eq!(Outcome::<i32>::NoContent.status_code(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_body_access() {
        assert_eq!(Outcome::Ok("x").body(), Some(&"x"));
        assert_eq!(Outcome::<&str>::NoContent.into_body(), None);
    }
}
