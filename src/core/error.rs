//! Typed error handling for the ordering API
//!
//! Every failure raised by a validation step or an existence lookup is one of
//! the variants below. Errors travel unchanged from the step that raised them
//! to the HTTP boundary, which maps them to a status code and a JSON body.
//!
//! # Error Categories
//!
//! - [`EntityError`]: the requested dish or order does not exist (404)
//! - [`ValidationError`]: the request payload breaks a field or domain rule (400)
//! - [`LifecycleError`]: the order's current status forbids the operation (400)
//! - [`RequestError`]: malformed body or unknown route
//!
//! # Example
//!
//! ```rust,ignore
//! match handlers.read(&store, "missing") {
//!     Err(ServiceError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("no order {}", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//!     Ok(outcome) => println!("{:?}", outcome),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The two resources governed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Dish,
    Order,
}

impl EntityKind {
    /// Singular name used in routes and logs
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Dish => "dish",
            EntityKind::Order => "order",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Dish => write!(f, "Dish"),
            EntityKind::Order => write!(f, "Order"),
        }
    }
}

/// The main error type of the service
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Existence lookup failed
    Entity(EntityError),

    /// Payload rejected by a validation step
    Validation(ValidationError),

    /// Operation forbidden by the order lifecycle
    Lifecycle(LifecycleError),

    /// Transport-level request problems
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Entity(e) => write!(f, "{}", e),
            ServiceError::Validation(e) => write!(f, "{}", e),
            ServiceError::Lifecycle(e) => write!(f, "{}", e),
            ServiceError::Request(e) => write!(f, "{}", e),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Entity(e) => Some(e),
            ServiceError::Validation(e) => Some(e),
            ServiceError::Lifecycle(e) => Some(e),
            ServiceError::Request(e) => Some(e),
            ServiceError::Internal(_) => None,
        }
    }
}

/// Error body returned to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message, verbatim from the failing step
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Entity(e) => e.status_code(),
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Lifecycle(_) => StatusCode::BAD_REQUEST,
            ServiceError::Request(e) => e.status_code(),
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Entity(e) => e.error_code(),
            ServiceError::Validation(e) => e.error_code(),
            ServiceError::Lifecycle(e) => e.error_code(),
            ServiceError::Request(e) => e.error_code(),
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors raised by existence lookups
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// No entity of this kind carries the requested id
    NotFound { kind: EntityKind, id: String },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound {
                kind: EntityKind::Dish,
                id,
            } => write!(f, "Dish does not exist: {}", id),
            EntityError::NotFound {
                kind: EntityKind::Order,
                id,
            } => write!(f, "Order not found: {}", id),
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for ServiceError {
    fn from(err: EntityError) -> Self {
        ServiceError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by validation steps
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is absent, empty or not a string
    MissingField { kind: EntityKind, field: String },

    /// `price` is not a positive integer
    InvalidPrice,

    /// `dishes` is absent (or falsy)
    MissingDishes,

    /// `dishes` is present but not a non-empty array
    EmptyDishes,

    /// The line at `index` has no positive integer `quantity`
    InvalidQuantity { index: usize },

    /// The payload `id` disagrees with the route id
    IdMismatch {
        kind: EntityKind,
        id: String,
        route_id: String,
    },

    /// `status` is absent or not one of the recognized values
    InvalidStatus,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { kind, field } => {
                write!(f, "{} must include a {}", kind, field)
            }
            ValidationError::InvalidPrice => {
                write!(f, "Dish must have a price that is an integer greater than 0")
            }
            ValidationError::MissingDishes => write!(f, "Order must include a dish"),
            ValidationError::EmptyDishes => write!(f, "Order must include at least one dish"),
            ValidationError::InvalidQuantity { index } => write!(
                f,
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ),
            ValidationError::IdMismatch {
                kind: EntityKind::Dish,
                id,
                route_id,
            } => write!(
                f,
                "Dish id does not match route id. Dish: {}, Route: {}",
                id, route_id
            ),
            ValidationError::IdMismatch {
                kind: EntityKind::Order,
                id,
                route_id,
            } => write!(
                f,
                "Order id does not match route id. Order: {}, Route: {}.",
                id, route_id
            ),
            ValidationError::InvalidStatus => write!(
                f,
                "Order must have a status of pending, preparing, out-for-delivery, delivered"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidPrice => "INVALID_PRICE",
            ValidationError::MissingDishes => "MISSING_DISHES",
            ValidationError::EmptyDishes => "EMPTY_DISHES",
            ValidationError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
            ValidationError::InvalidStatus => "INVALID_STATUS",
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}

// =============================================================================
// Lifecycle Errors
// =============================================================================

/// Errors raised by the order lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleError {
    /// The order is delivered and can no longer change
    Delivered,

    /// Only pending orders may be deleted
    NotPending,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::Delivered => write!(f, "A delivered order cannot be changed"),
            LifecycleError::NotPending => {
                write!(f, "An order cannot be deleted unless it is pending")
            }
        }
    }
}

impl std::error::Error for LifecycleError {}

impl LifecycleError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::Delivered => "ORDER_DELIVERED",
            LifecycleError::NotPending => "ORDER_NOT_PENDING",
        }
    }
}

impl From<LifecycleError> for ServiceError {
    fn from(err: LifecycleError) -> Self {
        ServiceError::Lifecycle(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Body is not valid JSON
    InvalidBody { message: String },

    /// No route matches the path
    PathNotFound { path: String },

    /// The path exists but not for this method
    MethodNotAllowed { method: String, path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::PathNotFound { path } => write!(f, "Path not found: {}", path),
            RequestError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::PathNotFound { .. } => "PATH_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

impl From<RequestError> for ServiceError {
    fn from(err: RequestError) -> Self {
        ServiceError::Request(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Request(RequestError::InvalidBody {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for handler operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Tests
// =============================================================================
