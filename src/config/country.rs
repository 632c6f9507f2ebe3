//! Country record structures

use serde::Deserialize;

/// One editorial country entry, as authored in the dashboard dataset.
///
/// `rank` and `total_score` are externally assigned ground truth; nothing in
/// this crate recomputes one from the other. The range and rate fields stay
/// display-ready strings here and are parsed once at normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub country: String,
    pub rank: i32,
    pub total_score: i32,
    pub english_usage: String,
    pub masters_scholarship: String,
    #[serde(default)]
    pub local_language_need: String,
    #[serde(default)]
    pub tax_level: String,
    pub spouse_work_allowed: String,
    pub tuition_range: String,
    pub living_cost_range: String,
    pub salary_range: String,
    /// Percentage-bearing string, e.g. "92%"; empty when not authored
    #[serde(default)]
    pub visa_success: String,
    #[serde(default)]
    pub post_study_work_visa: String,
    #[serde(default)]
    pub pr_timeline_years: String,
    #[serde(default)]
    pub part_time_work_hours: String,
}
