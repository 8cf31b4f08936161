//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires the dish and order stores into their descriptors,
//! registers them in an `EntityRegistry` and exposes the result over REST.

pub mod builder;
pub mod entity_registry;
pub mod extractor;
pub mod rest;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use rest::RestExposure;
