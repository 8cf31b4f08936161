//! Order lifecycle
//!
//! ```text
//! pending -> preparing -> out-for-delivery -> delivered (terminal)
//! ```
//!
//! Updates only check that the requested status is one of the four values;
//! the order of transitions is not enforced. Two rules are:
//!
//! - a delivered order accepts no further update or delete
//! - an order can be deleted only while it is pending

use super::model::Order;
use crate::core::{LifecycleError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized values of an order's `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Whether the order can no longer change
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(ValidationError::InvalidStatus)
    }
}

/// Guards for operations that depend on an order's current status
pub struct OrderLifecycle;

impl OrderLifecycle {
    /// Fails once the order has reached the terminal state
    pub fn ensure_mutable(order: &Order) -> Result<(), LifecycleError> {
        match order.status {
            Some(status) if status.is_terminal() => Err(LifecycleError::Delivered),
            _ => Ok(()),
        }
    }

    /// Fails unless the order is pending
    ///
    /// An order that never received a status is not pending.
    pub fn ensure_deletable(order: &Order) -> Result<(), LifecycleError> {
        match order.status {
            Some(OrderStatus::Pending) => Ok(()),
            _ => Err(LifecycleError::NotPending),
        }
    }
}
