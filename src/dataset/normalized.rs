//! Normalized country rows carrying derived metrics

use crate::config::CountryRecord;
use crate::metrics::{leading_percent, range_midpoint, score_tier, visa_tier, Tier};

/// A country record plus the metrics derived from its display strings.
///
/// Derived fields are computed exactly once here; queries never re-parse
/// the range strings.
#[derive(Debug, Clone)]
pub struct NormalizedCountry {
    pub record: CountryRecord,
    /// Leading integer of `visa_success` (Percentage Rule)
    pub visa_rate: i32,
    /// Range midpoints (average of first and last parsed number)
    pub tuition_mid: f64,
    pub living_cost_mid: f64,
    pub salary_mid: f64,
    pub score_tier: Tier,
    pub visa_tier: Tier,
}

impl NormalizedCountry {
    pub fn from_record(record: CountryRecord) -> Self {
        let visa_rate = leading_percent(&record.visa_success);
        Self {
            visa_rate,
            tuition_mid: range_midpoint(&record.tuition_range),
            living_cost_mid: range_midpoint(&record.living_cost_range),
            salary_mid: range_midpoint(&record.salary_range),
            score_tier: score_tier(record.total_score),
            visa_tier: visa_tier(visa_rate),
            record,
        }
    }
}

/// Derive metrics for every record, preserving input order.
///
/// Pure and idempotent. Malformed range strings degrade per the metric
/// rules instead of erroring; the dataset is trusted static content.
pub fn normalize(records: &[CountryRecord]) -> Vec<NormalizedCountry> {
    records
        .iter()
        .cloned()
        .map(NormalizedCountry::from_record)
        .collect()
}
