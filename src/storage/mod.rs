//! Storage and id-generation implementations

pub mod ids;
pub mod in_memory;

pub use ids::{SequentialIdGenerator, UuidGenerator};
pub use in_memory::InMemoryStore;
