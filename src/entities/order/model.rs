//! Order entity model

use super::lifecycle::OrderStatus;
use crate::core::validation::validators::{positive_integer, present};
use crate::core::{EntityKind, Payload, ServiceResult, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A customer order
///
/// `deliverTo` and `mobileNumber` hold whatever truthy JSON value the client
/// sent, usually a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated identifier, never changed after creation
    pub id: String,
    pub deliver_to: Value,
    pub mobile_number: Value,
    /// Ordered, non-empty list of lines
    pub dishes: Vec<OrderLine>,
    /// Unset from creation until the first update assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// One entry of an order's `dishes`
///
/// Fields other than `dishId` and `quantity` (typically a copy of the dish)
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    pub fn new(dish_id: impl Into<String>, quantity: u64) -> Self {
        Self {
            dish_id: Some(dish_id.into()),
            quantity,
            details: Map::new(),
        }
    }

    /// Read the line at `index` of a request's `dishes`
    pub fn from_value(index: usize, value: &Value) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidQuantity { index };
        let mut details = value.as_object().cloned().ok_or_else(invalid)?;

        let quantity = details
            .remove("quantity")
            .as_ref()
            .and_then(positive_integer)
            .ok_or_else(invalid)?;

        let dish_id = match details.get("dishId") {
            Some(Value::String(_)) => details
                .remove("dishId")
                .and_then(|id| id.as_str().map(str::to_string)),
            _ => None,
        };

        Ok(Self {
            dish_id,
            quantity,
            details,
        })
    }
}

/// The client-controlled fields of an order, read from a request payload
///
/// `status` is not among them: creation ignores it and update reads it
/// separately once the chain has accepted it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: Value,
    pub mobile_number: Value,
    pub dishes: Vec<OrderLine>,
}

impl OrderFields {
    /// Read the order fields from a payload that passed the order chain
    pub fn from_payload(payload: &Payload) -> ServiceResult<Self> {
        let text = |field: &str| -> Result<Value, ValidationError> {
            payload
                .get(field)
                .and_then(present)
                .cloned()
                .ok_or_else(|| ValidationError::MissingField {
                    kind: EntityKind::Order,
                    field: field.to_string(),
                })
        };

        let lines = payload
            .get("dishes")
            .and_then(Value::as_array)
            .filter(|lines| !lines.is_empty())
            .ok_or(ValidationError::EmptyDishes)?;
        let dishes = lines
            .iter()
            .enumerate()
            .map(|(index, line)| OrderLine::from_value(index, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            deliver_to: text("deliverTo")?,
            mobile_number: text("mobileNumber")?,
            dishes,
        })
    }

    /// The status requested by an update payload
    pub fn requested_status(payload: &Payload) -> ServiceResult<OrderStatus> {
        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .ok_or(ValidationError::InvalidStatus)?
            .parse::<OrderStatus>()?;
        Ok(status)
    }
}

impl Order {
    /// Build an order from payload fields and a freshly generated id
    ///
    /// The new order has no status.
    pub fn new(id: impl Into<String>, fields: OrderFields) -> Self {
        Self {
            id: id.into(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            dishes: fields.dishes,
            status: None,
        }
    }

    /// Overwrite every client-controlled field and the status, keeping the id
    pub fn apply(&mut self, fields: OrderFields, status: OrderStatus) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.dishes = fields.dishes;
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ServiceError;
    use serde_json::json;

    #[test]
    fn test_line_keeps_extra_fields() {
        let line = OrderLine::from_value(
            0,
            &json!({ "dishId": "d1", "quantity": 2, "name": "Soup", "price": 6 }),
        )
        .unwrap();

        assert_eq!(line.dish_id.as_deref(), Some("d1"));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.details.get("name"), Some(&json!("Soup")));
        assert!(!line.details.contains_key("quantity"));

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            json!({ "dishId": "d1", "quantity": 2, "name": "Soup", "price": 6 })
        );
    }

    #[test]
    fn test_line_rejects_bad_quantity() {
        for line in [
            json!({ "dishId": "d1" }),
            json!({ "dishId": "d1", "quantity": 0 }),
            json!({ "dishId": "d1", "quantity": "2" }),
            json!(7),
        ] {
            assert_eq!(
                OrderLine::from_value(3, &line),
                Err(ValidationError::InvalidQuantity { index: 3 })
            );
        }
    }

    #[test]
    fn test_new_order_ignores_sent_status() {
        let payload = Payload::from_body(json!({
            "data": {
                "deliverTo": "120 SW",
                "mobileNumber": 5551234,
                "dishes": [{ "dishId": "d1", "quantity": 2 }],
                "status": "delivered"
            }
        }));
        let order = Order::new("o1", OrderFields::from_payload(&payload).unwrap());

        assert_eq!(order.status, None);
        assert_eq!(order.mobile_number, json!(5551234));
    }

    #[test]
    fn test_requested_status() {
        let status =
            |data: Value| OrderFields::requested_status(&Payload::from_body(json!({ "data": data })));

        assert_eq!(
            status(json!({ "status": "out-for-delivery" })),
            Ok(OrderStatus::OutForDelivery)
        );
        for data in [json!({}), json!({ "status": "on-a-boat" }), json!({ "status": 1 })] {
            assert_eq!(
                status(data),
                Err(ServiceError::Validation(ValidationError::InvalidStatus))
            );
        }
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let order = Order {
            id: "o1".to_string(),
            deliver_to: json!("120 SW"),
            mobile_number: json!("555-1234"),
            dishes: vec![OrderLine::new("d1", 2)],
            status: None,
        };
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["deliverTo"], "120 SW");
        assert_eq!(value["mobileNumber"], "555-1234");
        assert_eq!(value["dishes"][0]["quantity"], 2);
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_apply_sets_status() {
        let mut order = Order::new(
            "o1",
            OrderFields {
                deliver_to: json!("120 SW"),
                mobile_number: json!("555-1234"),
                dishes: vec![OrderLine::new("d1", 2)],
            },
        );
        order.apply(
            OrderFields {
                deliver_to: json!("9 Elm St"),
                mobile_number: json!("555-0000"),
                dishes: vec![OrderLine::new("d2", 1)],
            },
            OrderStatus::Preparing,
        );

        assert_eq!(order.id, "o1");
        assert_eq!(order.deliver_to, json!("9 Elm St"));
        assert_eq!(order.status, Some(OrderStatus::Preparing));
        assert_eq!(serde_json::to_value(&order).unwrap()["status"], "preparing");
    }
}
