//! Algoplay Core - algorithm metadata catalog
//!
//! This crate holds the read-only catalog behind the Algorithm Playground
//! visualizer:
//! - Category → algorithm id → record registry, iterated in construction order
//! - Exact-match lookups with typed not-found errors
//! - Aggregate statistics derived from the catalog
//!
//! # Example
//!
//! ```
//! use algoplay_core::{Catalog, Difficulty};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let bubble = catalog.get_algorithm("sorting", "bubble").unwrap();
//! assert_eq!(bubble.name, "Bubble Sort");
//! assert_eq!(bubble.difficulty, Difficulty::Easy);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;

pub use catalog::{AlgorithmRecord, Catalog, Category, Difficulty, Statistics};
pub use error::{Error, Result};
