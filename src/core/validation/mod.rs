//! Validation pipeline
//!
//! Requests pass through a fixed, ordered [`ValidationChain`] before any store
//! mutation happens. Field-level checks live in [`validators`]; resource-level
//! chains are assembled by each entity module.

pub mod chain;
pub mod validators;

pub use chain::{RequestContext, ValidationChain};
pub use validators::{require_matching_id, require_present, require_positive_integer};
