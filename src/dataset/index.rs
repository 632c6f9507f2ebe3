//! Country name index with fast hashing (ahash)

use ahash::AHashMap;

use crate::dataset::NormalizedCountry;
use crate::error::{ExplorerError, Result};

/// Case-insensitive country -> row position index.
///
/// Building the index doubles as the uniqueness check: a duplicate country
/// name would make leaderboard picks ambiguous, so it is rejected here.
#[derive(Debug)]
pub struct DatasetIndex {
    by_name: AHashMap<String, usize>,
}

impl DatasetIndex {
    pub fn build(rows: &[NormalizedCountry]) -> Result<Self> {
        let mut by_name = AHashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            let key = row.record.country.to_lowercase();
            if by_name.insert(key, pos).is_some() {
                return Err(ExplorerError::DuplicateCountry(row.record.country.clone()));
            }
        }
        Ok(Self { by_name })
    }

    /// Row position for a country name, case-insensitive
    pub fn position(&self, country: &str) -> Option<usize> {
        self.by_name.get(&country.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
