use serde::{Deserialize, Serialize};

use crate::types::{PropertyKey, QuestionId};

/// A catalog entry probing exactly one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(alias = "prop")]
    pub property: PropertyKey,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        property: impl Into<PropertyKey>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            hint: None,
            property: property.into(),
        }
    }

    /// Attach a supporting hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
