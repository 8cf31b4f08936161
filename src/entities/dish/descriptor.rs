//! REST exposure for dishes

use super::handlers::DishHandlers;
use super::model::Dish;
use crate::core::store::lock_poisoned;
use crate::core::{EntityKind, Outcome, Payload, ServiceResult, SharedStore};
use crate::server::EntityDescriptor;
use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use std::sync::Arc;

/// State shared by the dish routes
#[derive(Clone)]
pub struct DishAppState {
    pub store: SharedStore<Dish>,
    pub handlers: Arc<DishHandlers>,
}

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    state: DishAppState,
}

impl DishDescriptor {
    pub fn new(store: SharedStore<Dish>, handlers: Arc<DishHandlers>) -> Self {
        Self {
            state: DishAppState { store, handlers },
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn kind(&self) -> EntityKind {
        EntityKind::Dish
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/dishes", get(list_dishes).post(create_dish))
            .route("/dishes/{dish_id}", get(read_dish).put(update_dish))
            .with_state(self.state.clone())
    }
}

pub async fn list_dishes(State(state): State<DishAppState>) -> ServiceResult<Outcome<Vec<Dish>>> {
    let store = state.store.read().map_err(lock_poisoned)?;
    Ok(state.handlers.list(&*store))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    payload: Payload,
) -> ServiceResult<Outcome<Dish>> {
    let mut store = state.store.write().map_err(lock_poisoned)?;
    state.handlers.create(&mut *store, &payload)
}

pub async fn read_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> ServiceResult<Outcome<Dish>> {
    let store = state.store.read().map_err(lock_poisoned)?;
    state.handlers.read(&*store, &dish_id)
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    payload: Payload,
) -> ServiceResult<Outcome<Dish>> {
    let mut store = state.store.write().map_err(lock_poisoned)?;
    state.handlers.update(&mut *store, &dish_id, &payload)
}
