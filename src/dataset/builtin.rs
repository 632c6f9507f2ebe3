//! Builtin country dataset
//!
//! The dashboard ships with a fixed editorial dataset; it is embedded here
//! as a JSON resource so the binding layer can initialize without any
//! caller-supplied data.

use once_cell::sync::Lazy;

use crate::config::CountryRecord;

static BUILTIN: Lazy<Vec<CountryRecord>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/countries.json"))
        .expect("embedded country dataset is valid")
});

/// The embedded editorial dataset (27 countries)
pub fn builtin_records() -> &'static [CountryRecord] {
    &BUILTIN
}
