//! Entity registry for managing entity descriptors and merging their routes

use crate::core::EntityKind;
use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for an entity
///
/// Dishes and orders each implement this trait to provide their routes.
pub trait EntityDescriptor: Send + Sync {
    /// Which resource this descriptor exposes
    fn kind(&self) -> EntityKind;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /{plural}
    /// - GET/PUT(/DELETE) /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities exposed by the server
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<EntityKind, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// A second descriptor for the same kind replaces the first.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        self.descriptors.insert(descriptor.kind(), descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Registered entity types (singular names), sorted
    pub fn entity_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.descriptors.keys().map(EntityKind::singular).collect();
        types.sort_unstable();
        types
    }
}
