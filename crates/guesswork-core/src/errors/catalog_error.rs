//! Catalog errors.

use super::error_code::{self, GuessworkErrorCode};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no items")]
    EmptyItems,

    #[error("catalog has no questions")]
    EmptyQuestions,

    #[error("duplicate item id: {id}")]
    DuplicateItemId { id: String },

    #[error("duplicate question id: {id}")]
    DuplicateQuestionId { id: String },

    #[error("item {item} has no value for property {property} (tested by question {question})")]
    MissingProperty {
        item: String,
        question: String,
        property: String,
    },

    #[error("unsupported catalog format for {path}: expected .json or .toml")]
    UnsupportedFormat { path: String },

    #[error("failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse catalog {path}: {message}")]
    Parse { path: String, message: String },
}

impl GuessworkErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
