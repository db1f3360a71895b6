//! Test fixture loader for Guesswork catalogs and scripted players.
//!
//! Provides the bundled career catalog, typed loading of fixture files, and
//! small builders for synthetic catalogs used in property tests and benches.

use std::path::PathBuf;

use guesswork_core::answer::Answer;
use guesswork_core::catalog::{Catalog, Item, Question};
use guesswork_core::types::PropertyKey;
use serde::de::DeserializeOwned;

/// Item ids of the career catalog, in declaration order.
pub const CAREER_IDS: [&str; 8] = [
    "architect",
    "ranger",
    "game_dev",
    "photographer",
    "physio",
    "filmmaker",
    "chef",
    "analyst",
];

/// Root directory of the bundled fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The 8-item, 12-question career catalog.
///
/// Every pair of careers differs on at least two tested properties, and the
/// last four questions re-test properties under different wording.
pub fn career_catalog() -> Catalog {
    load_fixture("catalogs/careers.json")
}

/// The answer a perfectly honest player thinking of `target` gives.
///
/// # Panics
/// Panics if the question's property is not declared on the target.
pub fn truthful(catalog: &Catalog, target: &str, question_id: &str) -> Answer {
    let item = catalog
        .item(target)
        .unwrap_or_else(|| panic!("unknown item {target}"));
    let question = catalog
        .question(question_id)
        .unwrap_or_else(|| panic!("unknown question {question_id}"));
    match item.property(question.property.as_str()) {
        Some(true) => Answer::StrongYes,
        Some(false) => Answer::StrongNo,
        None => panic!("{target} does not declare {}", question.property),
    }
}

/// Like [`truthful`], but hedged: lean answers instead of strong ones.
pub fn hedged(catalog: &Catalog, target: &str, question_id: &str) -> Answer {
    match truthful(catalog, target, question_id) {
        Answer::StrongYes => Answer::LeanYes,
        _ => Answer::LeanNo,
    }
}

/// Build a catalog from a property grid.
///
/// `grid[i][p]` is item `i`'s value for property `p`. One question per
/// property, declared in property order, plus one extra question per entry
/// of `repeats` re-testing that property index.
pub fn grid_catalog(grid: &[Vec<bool>], repeats: &[usize]) -> Catalog {
    let width = grid.first().map_or(0, Vec::len);
    let key = |p: usize| PropertyKey::new(format!("p{p}"));

    let items = grid
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Item::new(
                format!("item{i}"),
                format!("Item {i}"),
                row.iter().enumerate().map(|(p, &v)| (key(p), v)),
            )
        })
        .collect();

    let mut questions: Vec<Question> = (0..width)
        .map(|p| Question::new(format!("q{p}"), format!("Property {p}?"), key(p)))
        .collect();
    for (n, &p) in repeats.iter().enumerate() {
        questions.push(Question::new(
            format!("r{n}"),
            format!("Property {p}, again?"),
            key(p),
        ));
    }

    Catalog::new(items, questions)
}

/// A synthetic catalog where item `i` has property `p` iff bit `p` of `i`
/// is set. Every item has a unique bit pattern, so `bits` questions can in
/// principle tell `2^bits` items apart.
pub fn binary_catalog(bits: usize) -> Catalog {
    let grid: Vec<Vec<bool>> = (0..1usize << bits)
        .map(|i| (0..bits).map(|p| i & (1 << p) != 0).collect())
        .collect();
    grid_catalog(&grid, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_catalog_loads_and_validates() {
        let catalog = career_catalog();
        catalog.validate().unwrap();
        assert_eq!(catalog.item_count(), 8);
        assert_eq!(catalog.question_count(), 12);
        let ids: Vec<&str> = catalog.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, CAREER_IDS);
    }

    #[test]
    fn career_catalog_audits_clean() {
        let report = career_catalog().audit(2);
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn truthful_player_follows_properties() {
        let catalog = career_catalog();
        assert_eq!(truthful(&catalog, "ranger", "q2"), Answer::StrongYes);
        assert_eq!(truthful(&catalog, "ranger", "q3"), Answer::StrongNo);
        assert_eq!(hedged(&catalog, "ranger", "q2"), Answer::LeanYes);
    }

    #[test]
    fn binary_catalog_is_fully_distinct() {
        let catalog = binary_catalog(4);
        catalog.validate().unwrap();
        assert_eq!(catalog.item_count(), 16);
        assert_eq!(catalog.question_count(), 4);
        assert!(catalog.audit(1).close_pairs.is_empty());
    }
}
