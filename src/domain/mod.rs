//! Domain entities.
//!
//! The application has exactly one entity, the [`Counter`]. Everything above
//! this layer talks about counters through the types re-exported here.

mod counter;

pub use counter::{Counter, DomainError};
