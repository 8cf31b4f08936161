//! Collaborator traits for entity storage and id generation

use crate::core::error::ServiceError;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Ordered collection owning every entity of one kind
///
/// The store enforces no uniqueness or referential rules of its own; handlers
/// reach entities only through these lookups and mutate them in place.
///
/// Implementations are not required to be internally synchronized. Callers
/// must serialize mutations (single writer at a time); the REST layer does so
/// by holding each store behind a `RwLock` for the whole request.
pub trait Store<T>: Send + Sync {
    /// First entity matching the predicate
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Option<&T>;

    /// Mutable access to the first entity matching the predicate
    fn find_mut(&mut self, predicate: &dyn Fn(&T) -> bool) -> Option<&mut T>;

    /// Position of the first entity matching the predicate
    fn find_index(&self, predicate: &dyn Fn(&T) -> bool) -> Option<usize>;

    /// Append an entity at the end of the collection
    fn append(&mut self, entity: T);

    /// Remove the entity at `index`, or `None` if out of range
    fn remove_at(&mut self, index: usize) -> Option<T>;

    /// All entities, in insertion order
    fn all(&self) -> &[T];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Source of identifiers for newly created entities
///
/// Every returned id must be unique for the lifetime of the collection it
/// populates.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// A store shared between request handlers
///
/// Handlers hold the lock for the whole operation, read for lookups and
/// write for mutations, which gives the single-writer discipline `Store`
/// relies on.
pub type SharedStore<T> = Arc<RwLock<dyn Store<T>>>;

/// Wrap a store for sharing between handlers
pub fn share<T, S>(store: S) -> SharedStore<T>
where
    S: Store<T> + 'static,
{
    Arc::new(RwLock::new(store))
}

/// Map a poisoned lock to an internal error
pub fn lock_poisoned<E: fmt::Display>(err: E) -> ServiceError {
    ServiceError::Internal(format!("Failed to acquire store lock: {}", err))
}
