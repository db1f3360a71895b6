//! Construction-time catalog validation.

use rustc_hash::FxHashSet;

use super::Catalog;
use crate::errors::CatalogError;

impl Catalog {
    /// Check the invariants the engine relies on.
    ///
    /// - at least one item and one question
    /// - item ids and question ids are unique
    /// - every question's property has a value on every item
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.items.is_empty() {
            return Err(CatalogError::EmptyItems);
        }
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyQuestions);
        }

        let mut item_ids = FxHashSet::default();
        for item in &self.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItemId {
                    id: item.id.to_string(),
                });
            }
        }

        let mut question_ids = FxHashSet::default();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId {
                    id: question.id.to_string(),
                });
            }
        }

        for question in &self.questions {
            if let Some(item) = self
                .items
                .iter()
                .find(|i| i.property(question.property.as_str()).is_none())
            {
                return Err(CatalogError::MissingProperty {
                    item: item.id.to_string(),
                    question: question.id.to_string(),
                    property: question.property.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Item, Question};
    use crate::types::PropertyKey;

    fn item(id: &str, props: &[(&str, bool)]) -> Item {
        Item::new(
            id,
            id.to_uppercase(),
            props.iter().map(|(k, v)| (PropertyKey::new(*k), *v)),
        )
    }

    #[test]
    fn well_formed_catalog_passes() {
        let catalog = Catalog::new(
            vec![item("a", &[("p", true)]), item("b", &[("p", false)])],
            vec![Question::new("q1", "P?", "p")],
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn empty_catalogs_fail() {
        let no_items = Catalog::new(vec![], vec![Question::new("q1", "P?", "p")]);
        assert!(matches!(no_items.validate(), Err(CatalogError::EmptyItems)));

        let no_questions = Catalog::new(vec![item("a", &[("p", true)])], vec![]);
        assert!(matches!(
            no_questions.validate(),
            Err(CatalogError::EmptyQuestions)
        ));
    }

    #[test]
    fn duplicate_ids_fail() {
        let dup_items = Catalog::new(
            vec![item("a", &[("p", true)]), item("a", &[("p", false)])],
            vec![Question::new("q1", "P?", "p")],
        );
        match dup_items.validate() {
            Err(CatalogError::DuplicateItemId { id }) => assert_eq!(id, "a"),
            other => panic!("expected DuplicateItemId, got {other:?}"),
        }

        let dup_questions = Catalog::new(
            vec![item("a", &[("p", true)])],
            vec![Question::new("q1", "P?", "p"), Question::new("q1", "P again?", "p")],
        );
        assert!(matches!(
            dup_questions.validate(),
            Err(CatalogError::DuplicateQuestionId { .. })
        ));
    }

    #[test]
    fn missing_property_names_the_offenders() {
        let catalog = Catalog::new(
            vec![item("a", &[("p", true)]), item("b", &[("r", false)])],
            vec![Question::new("q1", "P?", "p")],
        );
        match catalog.validate() {
            Err(CatalogError::MissingProperty {
                item,
                question,
                property,
            }) => {
                assert_eq!(item, "b");
                assert_eq!(question, "q1");
                assert_eq!(property, "p");
            }
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }
}
