//! Validation chains for order requests
//!
//! Create runs the four shape checks. Update runs them after the existence
//! lookup, then checks the payload id, the requested status and finally the
//! delivered lock, in exactly that order: an unrecognized status is reported
//! before the delivered lock is consulted.

use super::lifecycle::OrderLifecycle;
use super::model::{Order, OrderFields, OrderLine};
use crate::core::validation::validators::is_truthy;
use crate::core::validation::{ValidationChain, require_matching_id, require_present};
use crate::core::{EntityKind, RequestContext, ServiceError, ServiceResult, ValidationError};
use serde_json::Value;

/// Validator: `dishes` must be present and a non-empty array
///
/// A missing (or falsy) value and a present-but-wrong value report different
/// messages.
pub fn dishes_is_non_empty_array(ctx: &RequestContext<'_, Order>) -> ServiceResult<()> {
    match ctx.field("dishes") {
        Some(dishes) if is_truthy(dishes) => match dishes {
            Value::Array(lines) if !lines.is_empty() => Ok(()),
            _ => Err(ValidationError::EmptyDishes.into()),
        },
        _ => Err(ValidationError::MissingDishes.into()),
    }
}

/// Validator: every line has a positive integer `quantity`
///
/// Reports the position of the first offending line.
pub fn every_line_has_positive_quantity(ctx: &RequestContext<'_, Order>) -> ServiceResult<()> {
    let Some(lines) = ctx.field("dishes").and_then(Value::as_array) else {
        return Ok(());
    };
    lines
        .iter()
        .enumerate()
        .try_for_each(|(index, line)| OrderLine::from_value(index, line).map(drop))
        .map_err(ServiceError::from)
}

/// Validator: `status` must be one of the recognized values
pub fn status_is_recognized(ctx: &RequestContext<'_, Order>) -> ServiceResult<()> {
    OrderFields::requested_status(ctx.payload).map(drop)
}

/// Validator: the order found by the existence lookup is not delivered
pub fn order_not_delivered(ctx: &RequestContext<'_, Order>) -> ServiceResult<()> {
    match ctx.existing {
        Some(order) => OrderLifecycle::ensure_mutable(order).map_err(ServiceError::from),
        None => Ok(()),
    }
}

/// Chain run before an order is created
pub fn create_chain() -> ValidationChain<Order> {
    ValidationChain::new()
        .step("deliverTo", require_present(EntityKind::Order, "deliverTo"))
        .step(
            "mobileNumber",
            require_present(EntityKind::Order, "mobileNumber"),
        )
        .step("dishes", dishes_is_non_empty_array)
        .step("quantity", every_line_has_positive_quantity)
}

/// Chain run after the existence lookup of an order update
pub fn update_chain() -> ValidationChain<Order> {
    create_chain()
        .step("id_matches_route", require_matching_id(EntityKind::Order))
        .step("status", status_is_recognized)
        .step("not_delivered", order_not_delivered)
}
