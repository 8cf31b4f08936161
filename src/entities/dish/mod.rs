//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod validation;

pub use descriptor::{DishAppState, DishDescriptor};
pub use handlers::DishHandlers;
pub use model::{Dish, DishFields};
