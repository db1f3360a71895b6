use serde::{Deserialize, Serialize};

use super::{Item, Question};
use crate::types::PropertyKey;

/// Ordered item and question catalogs.
///
/// Declaration order matters: it breaks ties both when picking the next
/// question and when picking the final guess.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, alias = "characters")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, questions: Vec<Question>) -> Self {
        Self { items, questions }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id.as_str() == id)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    /// Declaration index of an item.
    pub fn item_index(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id.as_str() == id)
    }

    /// Declaration index of a question.
    pub fn question_index(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id.as_str() == id)
    }

    /// Properties tested by at least one question, in first-use order.
    pub fn tested_properties(&self) -> Vec<PropertyKey> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.property) {
                seen.push(q.property.clone());
            }
        }
        seen
    }
}
