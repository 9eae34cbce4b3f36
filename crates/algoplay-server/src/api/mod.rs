//! API handlers

pub mod algorithms;
pub mod error;
pub mod health;
pub mod stats;
