//! Catalog module - category → algorithm → record registry
//!
//! The catalog is built once from a fixed table and never mutated
//! afterwards, so a single instance can be shared behind an `Arc` by any
//! number of readers without locking.
//!
//! # Layout
//!
//! - Categories are kept in construction order; that order drives
//!   [`Catalog::list_categories`], statistics output and JSON key order.
//! - Each category keeps its records in construction order plus an
//!   id → position index for exact-match lookups.

mod data;
mod record;

pub use record::{AlgorithmRecord, Difficulty};

use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Ordered group of algorithm records sharing a category id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    records: Vec<AlgorithmRecord>,
    index: HashMap<String, usize>,
}

impl Category {
    /// Create a category, rejecting empty input, duplicate ids and records
    /// that point at another category
    pub fn new(id: impl Into<String>, records: Vec<AlgorithmRecord>) -> Result<Self> {
        let id = id.into();

        if records.is_empty() {
            return Err(Error::invalid_catalog(format!(
                "category '{}' has no algorithms",
                id
            )));
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.category != id {
                return Err(Error::invalid_catalog(format!(
                    "algorithm '{}' declares category '{}' but is listed under '{}'",
                    record.id, record.category, id
                )));
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(Error::invalid_catalog(format!(
                    "duplicate algorithm '{}' in category '{}'",
                    record.id, id
                )));
            }
        }

        Ok(Self { id, records, index })
    }

    /// Category id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of algorithms in this category
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed category
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact id
    pub fn get(&self, algorithm_id: &str) -> Option<&AlgorithmRecord> {
        self.index.get(algorithm_id).map(|&i| &self.records[i])
    }

    /// Records in construction order
    pub fn records(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    /// Iterate `(algorithm id, record)` pairs in construction order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AlgorithmRecord)> {
        self.records.iter().map(|r| (r.id.as_str(), r))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (id, record) in self.iter() {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

/// Aggregate counts over the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Statistics {
    /// Sum of all per-category counts
    pub total_algorithms: usize,
    /// Number of categories
    pub total_categories: usize,
    /// Category ids in catalog order
    pub categories: Vec<String>,
    /// Algorithm count per category, in catalog order
    #[serde(rename = "algorithms_by_category", serialize_with = "ordered_counts")]
    pub counts_by_category: Vec<(String, usize)>,
}

fn ordered_counts<S: Serializer>(
    counts: &[(String, usize)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (id, count) in counts {
        map.serialize_entry(id, count)?;
    }
    map.end()
}

/// Immutable registry of algorithm metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from categories in the desired iteration order
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::invalid_catalog("catalog has no categories"));
        }

        let mut index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if index.insert(category.id.clone(), position).is_some() {
                return Err(Error::invalid_catalog(format!(
                    "duplicate category '{}'",
                    category.id
                )));
            }
        }

        Ok(Self { categories, index })
    }

    /// Build the catalog shipped with the playground
    pub fn builtin() -> Result<Self> {
        let categories = data::BUILTIN
            .iter()
            .map(|spec| {
                let records = spec
                    .algorithms
                    .iter()
                    .map(|algo| algo.to_record(spec.id))
                    .collect();
                Category::new(spec.id, records)
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::new(categories)?;
        tracing::debug!(
            "Built-in catalog loaded: {} algorithms in {} categories",
            catalog.total_algorithms(),
            catalog.total_categories()
        );
        Ok(catalog)
    }

    /// Category ids in construction order
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// Records of one category
    pub fn get_category(&self, category_id: &str) -> Result<&Category> {
        self.index
            .get(category_id)
            .map(|&i| &self.categories[i])
            .ok_or_else(|| Error::category_not_found(category_id))
    }

    /// One record; an unknown category is reported before an unknown algorithm
    pub fn get_algorithm(&self, category_id: &str, algorithm_id: &str) -> Result<&AlgorithmRecord> {
        self.get_category(category_id)?
            .get(algorithm_id)
            .ok_or_else(|| Error::algorithm_not_found(category_id, algorithm_id))
    }

    /// The whole nested structure, for bulk export
    ///
    /// Serializes as `{category: {algorithm: record}}` in construction order.
    pub fn get_all(&self) -> &Self {
        self
    }

    /// Derive aggregate counts
    pub fn get_statistics(&self) -> Statistics {
        let counts_by_category: Vec<(String, usize)> = self
            .categories
            .iter()
            .map(|c| (c.id.clone(), c.len()))
            .collect();

        Statistics {
            total_algorithms: counts_by_category.iter().map(|(_, n)| n).sum(),
            total_categories: self.categories.len(),
            categories: self.categories.iter().map(|c| c.id.clone()).collect(),
            counts_by_category,
        }
    }

    /// Categories in construction order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Total number of records across all categories
    pub fn total_algorithms(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Number of categories
    pub fn total_categories(&self) -> usize {
        self.categories.len()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.id, category)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, id: &str) -> AlgorithmRecord {
        AlgorithmRecord::new(id, id.to_uppercase(), category, Difficulty::Easy)
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.total_categories(), 13);
        assert_eq!(catalog.total_algorithms(), 102);
        assert_eq!(catalog.list_categories()[0], "sorting");
        assert_eq!(catalog.list_categories()[12], "backtracking");
    }

    #[test]
    fn test_category_rejects_duplicate_algorithm() {
        let err = Category::new("c", vec![record("c", "a"), record("c", "a")]).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn test_category_rejects_empty() {
        assert!(Category::new("c", Vec::new()).is_err());
    }

    #[test]
    fn test_category_rejects_mismatched_back_reference() {
        let err = Category::new("c", vec![record("other", "a")]).unwrap_err();
        assert!(err.to_string().contains("declares category 'other'"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_category() {
        let first = Category::new("c", vec![record("c", "a")]).unwrap();
        let second = Category::new("c", vec![record("c", "b")]).unwrap();
        assert!(Catalog::new(vec![first, second]).is_err());
    }

    #[test]
    fn test_catalog_rejects_empty() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_same_algorithm_id_in_two_categories() {
        let a = Category::new("a", vec![record("a", "shared")]).unwrap();
        let b = Category::new("b", vec![record("b", "shared")]).unwrap();
        let catalog = Catalog::new(vec![a, b]).unwrap();

        assert_eq!(catalog.get_algorithm("a", "shared").unwrap().category, "a");
        assert_eq!(catalog.get_algorithm("b", "shared").unwrap().category, "b");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get_category("Sorting").is_err());
        assert!(catalog.get_algorithm("sorting", "Bubble").is_err());
    }

    #[test]
    fn test_category_serializes_in_order() {
        let category = Category::new("c", vec![record("c", "zeta"), record("c", "alpha")]).unwrap();
        let json = serde_json::to_string(&category).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_statistics_follow_catalog_order() {
        let stats = Catalog::builtin().unwrap().get_statistics();
        assert_eq!(stats.counts_by_category[0], ("sorting".to_string(), 10));
        assert_eq!(stats.counts_by_category[10], ("hash".to_string(), 5));
        assert_eq!(stats.categories.len(), stats.counts_by_category.len());
    }
}
