//! Order resource handlers

use super::lifecycle::OrderLifecycle;
use super::model::{Order, OrderFields};
use super::validation::{create_chain, update_chain};
use crate::core::{
    EntityError, EntityKind, IdGenerator, Outcome, Payload, RequestContext, ServiceError,
    ServiceResult, Store, ValidationChain,
};
use std::sync::Arc;

/// Create, list, read, update and destroy for orders
pub struct OrderHandlers {
    ids: Arc<dyn IdGenerator>,
    create_chain: ValidationChain<Order>,
    update_chain: ValidationChain<Order>,
}

impl OrderHandlers {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            create_chain: create_chain(),
            update_chain: update_chain(),
        }
    }

    /// Append a new order
    ///
    /// A `status` in the payload is accepted and ignored; the order starts
    /// without one and is not `pending` until an update says so.
    pub fn create(
        &self,
        store: &mut dyn Store<Order>,
        payload: &Payload,
    ) -> ServiceResult<Outcome<Order>> {
        self.create_chain.run(&RequestContext::new(payload))?;

        let order = Order::new(self.ids.next_id(), OrderFields::from_payload(payload)?);
        store.append(order.clone());

        tracing::info!(order_id = %order.id, lines = order.dishes.len(), "order created");
        Ok(Outcome::Created(order))
    }

    pub fn list(&self, store: &dyn Store<Order>) -> Outcome<Vec<Order>> {
        Outcome::Ok(store.all().to_vec())
    }

    pub fn read(&self, store: &dyn Store<Order>, id: &str) -> ServiceResult<Outcome<Order>> {
        order_exists(store, id).map(|order| Outcome::Ok(order.clone()))
    }

    /// Overwrite deliverTo, mobileNumber, dishes and status in place
    pub fn update(
        &self,
        store: &mut dyn Store<Order>,
        id: &str,
        payload: &Payload,
    ) -> ServiceResult<Outcome<Order>> {
        let existing = order_exists(&*store, id)?;
        let ctx = RequestContext::new(payload)
            .with_route_id(id)
            .with_existing(existing);
        self.update_chain.run(&ctx)?;

        let fields = OrderFields::from_payload(payload)?;
        let status = OrderFields::requested_status(payload)?;
        let order = store
            .find_mut(&|order: &Order| order.id == id)
            .ok_or_else(|| not_found(id))?;
        order.apply(fields, status);

        tracing::info!(order_id = %id, %status, "order updated");
        Ok(Outcome::Ok(order.clone()))
    }

    /// Remove a pending order
    pub fn destroy(&self, store: &mut dyn Store<Order>, id: &str) -> ServiceResult<Outcome<Order>> {
        let index = store
            .find_index(&|order: &Order| order.id == id)
            .ok_or_else(|| not_found(id))?;

        let order = store
            .all()
            .get(index)
            .ok_or_else(|| ServiceError::Internal(format!("order index {} out of range", index)))?;
        OrderLifecycle::ensure_deletable(order)?;

        store
            .remove_at(index)
            .ok_or_else(|| ServiceError::Internal(format!("order index {} out of range", index)))?;

        tracing::info!(order_id = %id, "order deleted");
        Ok(Outcome::NoContent)
    }
}

/// Existence lookup by route id
fn order_exists<'s>(store: &'s dyn Store<Order>, id: &str) -> ServiceResult<&'s Order> {
    store
        .find(&|order: &Order| order.id == id)
        .ok_or_else(|| not_found(id).into())
}

fn not_found(id: &str) -> EntityError {
    EntityError::NotFound {
        kind: EntityKind::Order,
        id: id.to_string(),
    }
}
