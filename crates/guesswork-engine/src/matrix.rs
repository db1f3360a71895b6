//! Dense question × item property matrix.
//!
//! Resolved once at construction so the round loop never touches string keys.

use guesswork_core::catalog::Catalog;
use guesswork_core::errors::CatalogError;

/// Column-per-question view of the catalog: `columns[q][i]` is item `i`'s
/// value for the property question `q` tests.
#[derive(Debug, Clone)]
pub struct PropertyMatrix {
    columns: Vec<Vec<bool>>,
    item_count: usize,
}

impl PropertyMatrix {
    /// Build the matrix. Fails if any item lacks a tested property.
    pub fn build(catalog: &Catalog) -> Result<Self, CatalogError> {
        let columns = catalog
            .questions
            .iter()
            .map(|question| {
                catalog
                    .items
                    .iter()
                    .map(|item| {
                        item.property(question.property.as_str()).ok_or_else(|| {
                            CatalogError::MissingProperty {
                                item: item.id.to_string(),
                                question: question.id.to_string(),
                                property: question.property.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<bool>, CatalogError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns,
            item_count: catalog.item_count(),
        })
    }

    /// Property values of every item for one question, in item order.
    pub fn column(&self, question: usize) -> &[bool] {
        &self.columns[question]
    }

    pub fn value(&self, question: usize, item: usize) -> bool {
        self.columns[question][item]
    }

    pub fn question_count(&self) -> usize {
        self.columns.len()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
}
