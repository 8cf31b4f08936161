//! REST exposure for orders

use super::handlers::OrderHandlers;
use super::model::Order;
use crate::core::store::lock_poisoned;
use crate::core::{EntityKind, Outcome, Payload, ServiceResult, SharedStore};
use crate::server::EntityDescriptor;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use std::sync::Arc;

/// State shared by the order routes
#[derive(Clone)]
pub struct OrderAppState {
    pub store: SharedStore<Order>,
    pub handlers: Arc<OrderHandlers>,
}

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    state: OrderAppState,
}

impl OrderDescriptor {
    pub fn new(store: SharedStore<Order>, handlers: Arc<OrderHandlers>) -> Self {
        Self {
            state: OrderAppState { store, handlers },
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Order
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{order_id}",
                get(read_order).put(update_order).delete(destroy_order),
            )
            .with_state(self.state.clone())
    }
}

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> ServiceResult<Outcome<Vec<Order>>> {
    let store = state.store.read().map_err(lock_poisoned)?;
    Ok(state.handlers.list(&*store))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    payload: Payload,
) -> ServiceResult<Outcome<Order>> {
    let mut store = state.store.write().map_err(lock_poisoned)?;
    state.handlers.create(&mut *store, &payload)
}

pub async fn read_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ServiceResult<Outcome<Order>> {
    let store = state.store.read().map_err(lock_poisoned)?;
    state.handlers.read(&*store, &order_id)
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    payload: Payload,
) -> ServiceResult<Outcome<Order>> {
    let mut store = state.store.write().map_err(lock_poisoned)?;
    state.handlers.update(&mut *store, &order_id, &payload)
}

pub async fn destroy_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ServiceResult<Outcome<Order>> {
    let mut store = state.store.write().map_err(lock_poisoned)?;
    state.handlers.destroy(&mut *store, &order_id)
}
