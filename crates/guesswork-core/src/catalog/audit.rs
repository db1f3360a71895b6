//! Property-matrix audit.
//!
//! Content rule: any two items must differ on at least `min_differences`
//! of the properties that questions actually test, otherwise no sequence of
//! answers can tell them apart with confidence. The audit reports, it never
//! rejects: a catalog that fails it still runs.

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::constants::SUCCESS_STEP_COUNT;
use crate::types::{ItemId, PropertyKey};

/// Two items that differ on fewer tested properties than required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosePair {
    pub first: ItemId,
    pub second: ItemId,
    pub differences: usize,
}

/// Findings of a catalog audit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub min_differences: usize,
    /// Item pairs below `min_differences`, in declaration order.
    pub close_pairs: Vec<ClosePair>,
    /// Tested properties on which every item agrees.
    pub constant_properties: Vec<PropertyKey>,
    /// Properties declared on items that no question tests.
    pub untested_properties: Vec<PropertyKey>,
    /// Items whose success-step list is neither empty nor the expected length.
    #[serde(default)]
    pub irregular_success_steps: Vec<ItemId>,
}

impl AuditReport {
    /// Returns true if the audit found nothing.
    pub fn is_clean(&self) -> bool {
        self.close_pairs.is_empty()
            && self.constant_properties.is_empty()
            && self.untested_properties.is_empty()
            && self.irregular_success_steps.is_empty()
    }
}

impl Catalog {
    /// Audit the property matrix against the minimum-difference rule.
    pub fn audit(&self, min_differences: usize) -> AuditReport {
        let tested = self.tested_properties();

        let mut close_pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                let differences = tested
                    .iter()
                    .filter(|k| a.property(k.as_str()) != b.property(k.as_str()))
                    .count();
                if differences < min_differences {
                    close_pairs.push(ClosePair {
                        first: a.id.clone(),
                        second: b.id.clone(),
                        differences,
                    });
                }
            }
        }

        let constant_properties = tested
            .iter()
            .filter(|k| {
                let mut values = self.items.iter().map(|i| i.property(k.as_str()));
                match values.next() {
                    Some(first) => values.all(|v| v == first),
                    None => false,
                }
            })
            .cloned()
            .collect();

        let mut untested_properties: Vec<PropertyKey> = Vec::new();
        for item in &self.items {
            for key in item.properties.keys() {
                if !tested.contains(key) && !untested_properties.contains(key) {
                    untested_properties.push(key.clone());
                }
            }
        }

        let irregular_success_steps = self
            .items
            .iter()
            .filter(|i| !i.success_steps.is_empty() && i.success_steps.len() != SUCCESS_STEP_COUNT)
            .map(|i| i.id.clone())
            .collect();

        AuditReport {
            min_differences,
            close_pairs,
            constant_properties,
            untested_properties,
            irregular_success_steps,
        }
    }
}
