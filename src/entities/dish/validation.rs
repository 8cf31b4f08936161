//! Validation chains for dish requests

use super::model::Dish;
use crate::core::validation::{
    ValidationChain, require_matching_id, require_positive_integer, require_present,
};
use crate::core::{EntityKind, ValidationError};

/// Checks shared by create and update, in the order they run
fn field_checks() -> ValidationChain<Dish> {
    ValidationChain::new()
        .step("name", require_present(EntityKind::Dish, "name"))
        .step("description", require_present(EntityKind::Dish, "description"))
        .step("image_url", require_present(EntityKind::Dish, "image_url"))
        .step(
            "price",
            require_positive_integer("price", ValidationError::InvalidPrice),
        )
}

/// Chain run before a dish is created
pub fn create_chain() -> ValidationChain<Dish> {
    field_checks()
}

/// Chain run after the existence lookup of a dish update
pub fn update_chain() -> ValidationChain<Dish> {
    field_checks().step("id_matches_route", require_matching_id(EntityKind::Dish))
}
