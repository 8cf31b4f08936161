//! # GrubDash
//!
//! Business-rule layer of a restaurant ordering API.
//!
//! Two resources are exposed over REST: dishes (create, list, read, update)
//! and orders (the same plus delete). Every mutating request passes through an
//! ordered validation chain that stops at the first failing check, and orders
//! follow a small lifecycle: any order may be edited until it is `delivered`,
//! and only `pending` orders may be deleted.
//!
//! ## Layout
//!
//! - [`core`]: error taxonomy, payload envelope, validation chain, store traits
//! - [`entities`]: dish and order models, chains, handlers and routes
//! - [`storage`]: in-memory store and id generators
//! - [`server`]: `ServerBuilder` and the REST exposure
//! - [`config`]: YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_config(AppConfig::from_yaml_file("grubdash.yaml")?)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::AppConfig;

    pub use crate::core::{
        EntityError, EntityKind, IdGenerator, LifecycleError, Outcome, Payload, RequestContext,
        RequestError, ServiceError, ServiceResult, SharedStore, Store, ValidationChain,
        ValidationError,
    };

    pub use crate::entities::dish::{Dish, DishHandlers};
    pub use crate::entities::order::{
        Order, OrderHandlers, OrderLifecycle, OrderLine, OrderStatus,
    };

    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    pub use crate::storage::{InMemoryStore, SequentialIdGenerator, UuidGenerator};
}
