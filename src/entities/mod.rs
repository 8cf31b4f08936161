//! Entities module - the two resources governed by the API

pub mod dish;
pub mod order;

pub use dish::{Dish, DishHandlers};
pub use order::{Order, OrderHandlers, OrderLine, OrderStatus};
