//! In-memory implementation of Store for development and testing

use crate::core::Store;

/// Vec-backed store keeping entities in insertion order
///
/// Not synchronized on its own; share it as `Arc<RwLock<InMemoryStore<T>>>`
/// when handlers run on several threads.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    items: Vec<T>,
}

impl<T> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store preloaded with `items`
    pub fn with_items(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync> Store<T> for InMemoryStore<T> {
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    fn find_mut(&mut self, predicate: &dyn Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| predicate(item))
    }

    fn find_index(&self, predicate: &dyn Fn(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    fn append(&mut self, entity: T) {
        self.items.push(entity);
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn all(&self) -> &[T] {
        &self.items
    }
}
