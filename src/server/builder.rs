//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::rest::RestExposure;
use crate::config::AppConfig;
use crate::core::store::share;
use crate::core::{IdGenerator, SharedStore, Store};
use crate::entities::dish::{Dish, DishDescriptor, DishHandlers};
use crate::entities::order::{Order, OrderDescriptor, OrderHandlers};
use crate::storage::{InMemoryStore, UuidGenerator};
use anyhow::{Result, bail};
use axum::Router;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the restaurant ordering HTTP server
///
/// Stores and the id generator default to in-memory collections and random
/// hex ids. Seed records from the configuration are loaded into the default
/// stores only; injected stores are used as given.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("grubdash.yaml")?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    dish_store: Option<SharedStore<Dish>>,
    order_store: Option<SharedStore<Order>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            dish_store: None,
            order_store: None,
            ids: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `store` for dishes instead of a seeded in-memory store
    pub fn with_dish_store(mut self, store: impl Store<Dish> + 'static) -> Self {
        self.dish_store = Some(share(store));
        self
    }

    /// Use `store` for orders instead of a seeded in-memory store
    pub fn with_order_store(mut self, store: impl Store<Order> + 'static) -> Self {
        self.order_store = Some(share(store));
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Arc::new(ids));
        self
    }

    /// Register the dish and order descriptors
    pub fn build_registry(self) -> Result<EntityRegistry> {
        let ids: Arc<dyn IdGenerator> = self.ids.unwrap_or_else(|| Arc::new(UuidGenerator));
        let seed = self.config.seed;

        let dish_store = match self.dish_store {
            Some(store) => store,
            None => {
                ensure_unique_ids("dish", seed.dishes.iter().map(|dish| dish.id.as_str()))?;
                share(InMemoryStore::with_items(seed.dishes))
            }
        };
        let order_store = match self.order_store {
            Some(store) => store,
            None => {
                ensure_unique_ids("order", seed.orders.iter().map(|order| order.id.as_str()))?;
                share(InMemoryStore::with_items(seed.orders))
            }
        };

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(
            dish_store,
            Arc::new(DishHandlers::new(ids.clone())),
        )));
        registry.register(Box::new(OrderDescriptor::new(
            order_store,
            Arc::new(OrderHandlers::new(ids)),
        )));

        tracing::debug!(entities = ?registry.entity_types(), "entities registered");
        Ok(registry)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let registry = self.build_registry()?;
        Ok(RestExposure::build_router(&registry))
    }

    /// Serve the application on the configured address with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("Duplicate {} id in seed data: {}", kind, id);
        }
    }
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
