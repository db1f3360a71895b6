//! Catalog schema: items, questions, loading, validation, and audit.
//!
//! The catalog is configuration, not round state. It is supplied once and
//! never mutated by the engine.

pub mod audit;
pub mod definition;
pub mod item;
pub mod loader;
pub mod question;
pub mod validation;

pub use audit::{AuditReport, ClosePair};
pub use definition::Catalog;
pub use item::Item;
pub use question::Question;
