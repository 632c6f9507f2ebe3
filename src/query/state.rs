//! Query state owned by an explorer session

/// Sort orderings offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Editorial composite score, best first (tie-break: rank ascending)
    #[default]
    ScoreDesc,
    /// Editorial rank, 1 first
    RankAsc,
    /// Parsed visa success rate, best first (tie-break: score descending)
    VisaDesc,
    /// Tuition midpoint, cheapest first (tie-break: score descending)
    TuitionAsc,
    /// Living cost midpoint, cheapest first (tie-break: score descending)
    LivingAsc,
    /// Salary midpoint, highest first (tie-break: score descending)
    SalaryDesc,
}

impl SortKey {
    /// Parse a UI-supplied key name; unknown keys are `None`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "score" | "score_desc" | "scoredesc" => Some(SortKey::ScoreDesc),
            "rank" | "rank_asc" | "rankasc" => Some(SortKey::RankAsc),
            "visa" | "visa_desc" | "visadesc" => Some(SortKey::VisaDesc),
            "tuition" | "tuition_asc" | "tuitionasc" => Some(SortKey::TuitionAsc),
            "living" | "living_asc" | "livingasc" => Some(SortKey::LivingAsc),
            "salary" | "salary_desc" | "salarydesc" => Some(SortKey::SalaryDesc),
            _ => None,
        }
    }

    /// Parse with the lenient fallback policy: the keys originate from a
    /// fixed caller-controlled enumeration, so an unknown value falls back
    /// to the default ordering instead of failing.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ScoreDesc => "score_desc",
            SortKey::RankAsc => "rank_asc",
            SortKey::VisaDesc => "visa_desc",
            SortKey::TuitionAsc => "tuition_asc",
            SortKey::LivingAsc => "living_asc",
            SortKey::SalaryDesc => "salary_desc",
        }
    }
}

/// Sentinel for "no filter constraint"
pub const FILTER_ALL: &str = "all";

/// The mutable search/sort/filter parameters driving the current view.
///
/// One instance per explorer session; mutated only through the explorer's
/// setters and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive substring over country name and English usage
    pub search_text: String,
    pub sort_key: SortKey,
    /// Exact match on `masters_scholarship`, or `"all"`
    pub scholarship_filter: String,
    /// `"Yes"`, `"No"`, or `"all"`
    pub spouse_filter: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::default(),
            scholarship_filter: FILTER_ALL.to_string(),
            spouse_filter: FILTER_ALL.to_string(),
        }
    }
}

/// Normalize a UI-supplied spouse filter value; anything outside the fixed
/// vocabulary falls back to `"all"`.
pub fn normalize_spouse_filter(value: &str) -> String {
    match value.to_lowercase().as_str() {
        "yes" => "Yes".to_string(),
        "no" => "No".to_string(),
        _ => FILTER_ALL.to_string(),
    }
}
