use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, PropertyKey};

/// A catalog entry the engine may ultimately guess.
///
/// Display fields (`name`, `icon`, `description`, `colors`) and the outlook
/// fields shown after a discovery reveal are opaque to the engine; only
/// `properties` participates in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, alias = "emoji", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, alias = "fact", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presentation colors, e.g. a `[from, to]` gradient.
    #[serde(default, alias = "gradient", skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// How technology is expected to change this item, shown after the reveal.
    #[serde(default, alias = "aiImpact", skip_serializing_if = "Option::is_none")]
    pub ai_impact: Option<String>,
    /// Concrete next steps, shown after the reveal. Catalogs carry exactly
    /// [`SUCCESS_STEP_COUNT`](crate::constants::SUCCESS_STEP_COUNT) or none.
    #[serde(default, alias = "aiSuccessSteps", skip_serializing_if = "Vec::is_empty")]
    pub success_steps: Vec<String>,
    #[serde(alias = "props")]
    pub properties: BTreeMap<PropertyKey, bool>,
}

impl Item {
    /// Create an item with no display metadata beyond its name.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        properties: impl IntoIterator<Item = (PropertyKey, bool)>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            description: None,
            colors: Vec::new(),
            ai_impact: None,
            success_steps: Vec::new(),
            properties: properties.into_iter().collect(),
        }
    }

    /// Value of a property, `None` if the item does not declare it.
    pub fn property(&self, key: &str) -> Option<bool> {
        self.properties.get(key).copied()
    }
}
