//! Round lifecycle events.
//!
//! Presentation layers (narration, effects, progress bars) subscribe here
//! instead of polling the engine.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RoundEventHandler;
pub use types::*;
