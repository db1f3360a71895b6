//! Configuration system for Guesswork.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod catalog_config;
pub mod engine_config;
pub mod guesswork_config;
pub mod session_config;

pub use catalog_config::CatalogConfig;
pub use engine_config::EngineConfig;
pub use guesswork_config::{ConfigOverrides, GuessworkConfig};
pub use session_config::{PlayMode, SessionConfig};
