//! Dataset normalization and lookup
//!
//! Converts raw [`CountryRecord`](crate::config::CountryRecord)s into rows
//! carrying derived metrics, once per dataset load.

mod builtin;
mod index;
mod normalized;


pub use builtin::*;
pub use index::*;
pub use normalized::*;
