//! Derived metric rules
//!
//! This module turns the display-ready strings of the editorial dataset
//! ("8,000 - 15,000", "92%") into comparable numbers and ordinal tiers.

mod numbers;
mod tier;

#[cfg(test)]
mod property_tests;

pub use numbers::*;
pub use tier::*;
