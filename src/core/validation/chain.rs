//! Ordered validation chains
//!
//! A chain is a list of named checks sharing one contract: given the request
//! context, pass or fail with a [`ServiceError`](crate::core::ServiceError).
//! Running a chain stops at the first failing check, so exactly one error is
//! reported per request and no later check is evaluated.

use crate::core::error::ServiceResult;
use crate::core::payload::Payload;
use serde_json::Value;

/// Everything a check may look at
///
/// `existing` carries the entity found by the existence lookup that precedes
/// update chains; create chains leave it empty.
pub struct RequestContext<'a, T> {
    /// Identifier taken from the route, if the operation has one
    pub route_id: Option<&'a str>,
    /// The request `data` object
    pub payload: &'a Payload,
    /// Entity returned by the existence lookup
    pub existing: Option<&'a T>,
}

impl<'a, T> RequestContext<'a, T> {
    pub fn new(payload: &'a Payload) -> Self {
        Self {
            route_id: None,
            payload,
            existing: None,
        }
    }

    pub fn with_route_id(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    pub fn with_existing(mut self, existing: &'a T) -> Self {
        self.existing = Some(existing);
        self
    }

    /// Shortcut for `payload.get(field)`
    pub fn field(&self, field: &str) -> Option<&'a Value> {
        self.payload.get(field)
    }
}

type CheckFn<T> = Box<dyn Fn(&RequestContext<'_, T>) -> ServiceResult<()> + Send + Sync>;

/// Named checks run in insertion order until the first failure
pub struct ValidationChain<T> {
    steps: Vec<(&'static str, CheckFn<T>)>,
}

impl<T> ValidationChain<T> {
    /// Create an empty chain (always passes)
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a check at the end of the chain
    pub fn step<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&RequestContext<'_, T>) -> ServiceResult<()> + Send + Sync + 'static,
    {
        self.steps.push((name, Box::new(check)));
        self
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, ctx: &RequestContext<'_, T>) -> ServiceResult<()> {
        for (name, check) in &self.steps {
            if let Err(err) = check(ctx) {
                tracing::debug!(step = *name, error = %err, "validation chain stopped");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Step names, in the order they run
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ValidationChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationChain")
            .field("steps", &self.step_names())
            .finish()
    }
}
