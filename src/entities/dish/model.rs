//! Dish entity model

use crate::core::validation::validators::{positive_integer, present};
use crate::core::{EntityKind, Payload, ServiceResult, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu
///
/// The text fields hold whatever truthy JSON value the client sent, usually
/// a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Generated identifier, never changed after creation
    pub id: String,
    pub name: Value,
    pub description: Value,
    /// Price in whole currency units, always greater than 0
    pub price: u64,
    pub image_url: Value,
}

/// The four business fields of a dish, read from a request payload
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: Value,
    pub description: Value,
    pub price: u64,
    pub image_url: Value,
}

impl DishFields {
    /// Read the business fields from a payload that passed the dish chain
    pub fn from_payload(payload: &Payload) -> ServiceResult<Self> {
        let text = |field: &str| -> ServiceResult<Value> {
            payload
                .get(field)
                .and_then(present)
                .cloned()
                .ok_or_else(|| {
                    ValidationError::MissingField {
                        kind: EntityKind::Dish,
                        field: field.to_string(),
                    }
                    .into()
                })
        };

        Ok(Self {
            name: text("name")?,
            description: text("description")?,
            image_url: text("image_url")?,
            price: payload
                .get("price")
                .and_then(positive_integer)
                .ok_or(ValidationError::InvalidPrice)?,
        })
    }
}

impl Dish {
    /// Build a dish from validated fields and a freshly generated id
    pub fn new(id: impl Into<String>, fields: DishFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrite the business fields, keeping the id
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
