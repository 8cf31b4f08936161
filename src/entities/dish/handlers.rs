//! Dish resource handlers
//!
//! Each operation runs its validation chain to completion before touching the
//! store, so a rejected request never leaves a partial mutation behind.

use super::model::{Dish, DishFields};
use super::validation::{create_chain, update_chain};
use crate::core::{
    EntityError, EntityKind, IdGenerator, Outcome, Payload, RequestContext, ServiceResult, Store,
    ValidationChain,
};
use std::sync::Arc;

/// Create, list, read and update for dishes
///
/// Dishes have no destroy operation.
pub struct DishHandlers {
    ids: Arc<dyn IdGenerator>,
    create_chain: ValidationChain<Dish>,
    update_chain: ValidationChain<Dish>,
}

impl DishHandlers {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            create_chain: create_chain(),
            update_chain: update_chain(),
        }
    }

    pub fn create(
        &self,
        store: &mut dyn Store<Dish>,
        payload: &Payload,
    ) -> ServiceResult<Outcome<Dish>> {
        self.create_chain.run(&RequestContext::new(payload))?;

        let dish = Dish::new(self.ids.next_id(), DishFields::from_payload(payload)?);
        store.append(dish.clone());

        tracing::info!(dish_id = %dish.id, "dish created");
        Ok(Outcome::Created(dish))
    }

    pub fn list(&self, store: &dyn Store<Dish>) -> Outcome<Vec<Dish>> {
        Outcome::Ok(store.all().to_vec())
    }

    pub fn read(&self, store: &dyn Store<Dish>, id: &str) -> ServiceResult<Outcome<Dish>> {
        dish_exists(store, id).map(|dish| Outcome::Ok(dish.clone()))
    }

    pub fn update(
        &self,
        store: &mut dyn Store<Dish>,
        id: &str,
        payload: &Payload,
    ) -> ServiceResult<Outcome<Dish>> {
        let existing = dish_exists(&*store, id)?;
        let ctx = RequestContext::new(payload)
            .with_route_id(id)
            .with_existing(existing);
        self.update_chain.run(&ctx)?;

        let fields = DishFields::from_payload(payload)?;
        let dish = store
            .find_mut(&|dish: &Dish| dish.id == id)
            .ok_or_else(|| not_found(id))?;
        dish.apply(fields);

        tracing::info!(dish_id = %id, "dish updated");
        Ok(Outcome::Ok(dish.clone()))
    }
}

/// Existence lookup by route id
fn dish_exists<'s>(store: &'s dyn Store<Dish>, id: &str) -> ServiceResult<&'s Dish> {
    store
        .find(&|dish: &Dish| dish.id == id)
        .ok_or_else(|| not_found(id).into())
}

fn not_found(id: &str) -> EntityError {
    EntityError::NotFound {
        kind: EntityKind::Dish,
        id: id.to_string(),
    }
}
