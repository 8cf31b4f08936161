//! Core module containing the error taxonomy, request/response envelopes,
//! collaborator traits and the validation pipeline

pub mod error;
pub mod payload;
pub mod response;
pub mod store;
pub mod validation;

pub use error::{
    EntityError, EntityKind, LifecycleError, RequestError, ServiceError, ServiceResult,
    ValidationError,
};
pub use payload::Payload;
pub use response::Outcome;
pub use store::{IdGenerator, SharedStore, Store};
pub use validation::{RequestContext, ValidationChain};
