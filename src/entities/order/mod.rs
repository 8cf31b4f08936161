//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod validation;

pub use descriptor::{OrderAppState, OrderDescriptor};
pub use handlers::OrderHandlers;
pub use lifecycle::{OrderLifecycle, OrderStatus};
pub use model::{Order, OrderFields, OrderLine};
