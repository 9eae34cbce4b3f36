//! Algorithm metadata records

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty rating shown next to each algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Introductory material
    Easy,
    /// Needs some background
    Medium,
    /// Advanced material
    Hard,
}

impl Difficulty {
    /// Display name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(Error::invalid_catalog(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

/// Metadata describing one algorithm
///
/// Complexity fields are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRecord {
    /// Identifier, unique within the enclosing category
    pub id: String,
    /// Display name
    pub name: String,
    /// Id of the enclosing category
    pub category: String,
    /// Typical time complexity
    #[serde(rename = "complexity")]
    pub time_complexity: String,
    /// Best-case time complexity
    #[serde(rename = "best", default, skip_serializing_if = "Option::is_none")]
    pub best_case: Option<String>,
    /// Worst-case time complexity
    #[serde(rename = "worst", default, skip_serializing_if = "Option::is_none")]
    pub worst_case: Option<String>,
    /// Auxiliary space complexity
    #[serde(rename = "space")]
    pub space_complexity: String,
    /// Stability, only set for sorting algorithms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
    /// Human-readable summary
    #[serde(rename = "desc")]
    pub description: String,
    /// Display grouping such as "Divide & Conquer"
    pub category_label: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
}

impl AlgorithmRecord {
    /// Create a record with the required fields; optional fields start unset
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            time_complexity: String::new(),
            best_case: None,
            worst_case: None,
            space_complexity: String::new(),
            stable: None,
            description: String::new(),
            category_label: String::new(),
            difficulty,
        }
    }
}

/// Static form of a record, used by the built-in table
#[derive(Debug, Clone, Copy)]
pub(crate) struct AlgorithmSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub best: Option<&'static str>,
    pub worst: Option<&'static str>,
    pub space: &'static str,
    pub stable: Option<bool>,
    pub desc: &'static str,
    pub label: &'static str,
    pub difficulty: Difficulty,
}

impl AlgorithmSpec {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        label: &'static str,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name,
            time: "",
            best: None,
            worst: None,
            space: "",
            stable: None,
            desc: "",
            label,
            difficulty,
        }
    }

    pub const fn time(mut self, time: &'static str) -> Self {
        self.time = time;
        self
    }

    pub const fn cases(mut self, best: &'static str, worst: &'static str) -> Self {
        self.best = Some(best);
        self.worst = Some(worst);
        self
    }

    pub const fn space(mut self, space: &'static str) -> Self {
        self.space = space;
        self
    }

    pub const fn stable(mut self, stable: bool) -> Self {
        self.stable = Some(stable);
        self
    }

    pub const fn desc(mut self, desc: &'static str) -> Self {
        self.desc = desc;
        self
    }

    /// Materialize into an owned record under `category`
    pub fn to_record(&self, category: &str) -> AlgorithmRecord {
        AlgorithmRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: category.to_string(),
            time_complexity: self.time.to_string(),
            best_case: self.best.map(str::to_string),
            worst_case: self.worst.map(str::to_string),
            space_complexity: self.space.to_string(),
            stable: self.stable,
            description: self.desc.to_string(),
            category_label: self.label.to_string(),
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trips_through_str() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
        assert!("easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let record = AlgorithmRecord::new("bfs", "Breadth-First Search", "pathfinding", Difficulty::Easy);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("best").is_none());
        assert!(json.get("worst").is_none());
        assert!(json.get("stable").is_none());
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["category"], "pathfinding");
    }

    #[test]
    fn test_spec_to_record() {
        let spec = AlgorithmSpec::new("merge", "Merge Sort", "Divide & Conquer", Difficulty::Medium)
            .time("O(n log n)")
            .cases("O(n log n)", "O(n log n)")
            .space("O(n)")
            .stable(true)
            .desc("Divide, sort, merge.");
        let record = spec.to_record("sorting");

        assert_eq!(record.id, "merge");
        assert_eq!(record.category, "sorting");
        assert_eq!(record.category_label, "Divide & Conquer");
        assert_eq!(record.best_case.as_deref(), Some("O(n log n)"));
        assert_eq!(record.stable, Some(true));
    }

    #[test]
    fn test_record_wire_keys() {
        let record = AlgorithmSpec::new("bubble", "Bubble Sort", "Comparison Sort", Difficulty::Easy)
            .time("O(n²)")
            .cases("O(n)", "O(n²)")
            .space("O(1)")
            .stable(true)
            .desc("Swap adjacent pairs.")
            .to_record("sorting");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["complexity"], "O(n²)");
        assert_eq!(json["best"], "O(n)");
        assert_eq!(json["worst"], "O(n²)");
        assert_eq!(json["space"], "O(1)");
        assert_eq!(json["desc"], "Swap adjacent pairs.");
        for key in ["time_complexity", "best_case", "worst_case", "space_complexity", "description"] {
            assert!(json.get(key).is_none(), "unexpected key {}", key);
        }

        let back: AlgorithmRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
