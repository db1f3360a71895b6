//! # guesswork-core
//!
//! Foundation crate for the Guesswork matching engine.
//! Defines identifiers, answers, the catalog schema, errors, config,
//! events, tracing setup, and constants. Every other crate depends on this.

pub mod answer;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use answer::Answer;
pub use catalog::{AuditReport, Catalog, Item, Question};
pub use config::{EngineConfig, GuessworkConfig};
pub use errors::{CatalogError, ConfigError, EngineError, RoundError, SessionError};
pub use types::{ItemId, PropertyKey, QuestionId};
