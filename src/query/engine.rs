//! Query engine over the normalized dataset

use std::cmp::Ordering;

use crate::config::CountryRecord;
use crate::dataset::{normalize, DatasetIndex, NormalizedCountry};
use crate::error::{ExplorerError, Result};
use crate::query::{QueryState, SortKey, FILTER_ALL};

/// The four best-in-category picks, computed once over the full collection
/// with the same comparators as the sort table. Filter changes never touch
/// these.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub top_score: NormalizedCountry,
    pub top_visa: NormalizedCountry,
    pub lowest_tuition: NormalizedCountry,
    pub highest_salary: NormalizedCountry,
}

/// One filtered, ordered view over the dataset
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub rows: Vec<NormalizedCountry>,
    /// `rows.len()`, kept explicit for the "N of M shown" renderer label
    pub matched_count: usize,
    /// Full collection size
    pub total_count: usize,
}

/// Normalize-once, query-many engine.
///
/// Owns the normalized collection, its name index and the precomputed
/// leaderboard. Every [`query`](QueryEngine::query) call recomputes the view
/// in full; the collection is ~30 rows, incremental diffing would be all
/// cost and no benefit.
#[derive(Debug)]
pub struct QueryEngine {
    rows: Vec<NormalizedCountry>,
    index: DatasetIndex,
    leaderboard: Leaderboard,
}

impl QueryEngine {
    pub fn new(records: Vec<CountryRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ExplorerError::EmptyDataset);
        }

        let rows = normalize(&records);
        let index = DatasetIndex::build(&rows)?;
        let leaderboard = compute_leaderboard(&rows);

        Ok(Self {
            rows,
            index,
            leaderboard,
        })
    }

    /// Full normalized collection, in input order
    pub fn rows(&self) -> &[NormalizedCountry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Case-insensitive lookup by country name
    pub fn get(&self, country: &str) -> Option<&NormalizedCountry> {
        self.index.position(country).map(|pos| &self.rows[pos])
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Recompute the filtered, ordered view for `state`.
    ///
    /// Deterministic: the sort is stable, every comparator carries an
    /// explicit tie-break, and equal rows keep their input order beyond it.
    /// An empty result set is a valid state, not an error.
    pub fn query(&self, state: &QueryState) -> QueryResult {
        let mut rows: Vec<NormalizedCountry> = self
            .rows
            .iter()
            .filter(|row| matches(row, state))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare(state.sort_key, a, b));

        QueryResult {
            matched_count: rows.len(),
            total_count: self.rows.len(),
            rows,
        }
    }
}

/// Filter predicate: a row passes iff every active constraint holds
fn matches(row: &NormalizedCountry, state: &QueryState) -> bool {
    if !state.search_text.is_empty() {
        let needle = state.search_text.to_lowercase();
        let in_country = row.record.country.to_lowercase().contains(&needle);
        let in_usage = row.record.english_usage.to_lowercase().contains(&needle);
        if !in_country && !in_usage {
            return false;
        }
    }

    if state.scholarship_filter != FILTER_ALL
        && row.record.masters_scholarship != state.scholarship_filter
    {
        return false;
    }

    if state.spouse_filter != FILTER_ALL && row.record.spouse_work_allowed != state.spouse_filter {
        return false;
    }

    true
}

/// Total order for each sort key, with the tie-breaks of the sort table
fn compare(key: SortKey, a: &NormalizedCountry, b: &NormalizedCountry) -> Ordering {
    match key {
        SortKey::ScoreDesc => b
            .record
            .total_score
            .cmp(&a.record.total_score)
            .then(a.record.rank.cmp(&b.record.rank)),
        SortKey::RankAsc => a.record.rank.cmp(&b.record.rank),
        SortKey::VisaDesc => b
            .visa_rate
            .cmp(&a.visa_rate)
            .then(b.record.total_score.cmp(&a.record.total_score)),
        SortKey::TuitionAsc => a
            .tuition_mid
            .total_cmp(&b.tuition_mid)
            .then(b.record.total_score.cmp(&a.record.total_score)),
        SortKey::LivingAsc => a
            .living_cost_mid
            .total_cmp(&b.living_cost_mid)
            .then(b.record.total_score.cmp(&a.record.total_score)),
        SortKey::SalaryDesc => b
            .salary_mid
            .total_cmp(&a.salary_mid)
            .then(b.record.total_score.cmp(&a.record.total_score)),
    }
}

/// Position-0 pick under `key`, over the full collection
fn best_under(rows: &[NormalizedCountry], key: SortKey) -> NormalizedCountry {
    rows.iter()
        .enumerate()
        .min_by(|(ia, a), (ib, b)| compare(key, a, b).then(ia.cmp(ib)))
        .map(|(_, row)| row.clone())
        .expect("leaderboard requires a non-empty collection")
}

fn compute_leaderboard(rows: &[NormalizedCountry]) -> Leaderboard {
    Leaderboard {
        top_score: best_under(rows, SortKey::ScoreDesc),
        top_visa: best_under(rows, SortKey::VisaDesc),
        lowest_tuition: best_under(rows, SortKey::TuitionAsc),
        highest_salary: best_under(rows, SortKey::SalaryDesc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builtin_records;

    fn engine() -> QueryEngine {
        QueryEngine::new(builtin_records().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = QueryEngine::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ExplorerError::EmptyDataset));
    }

    #[test]
    fn test_default_query_returns_everything_score_sorted() {
        let engine = engine();
        let result = engine.query(&QueryState::default());
        assert_eq!(result.matched_count, result.total_count);
        assert_eq!(result.rows.len(), 27);
        for pair in result.rows.windows(2) {
            assert!(pair[0].record.total_score >= pair[1].record.total_score);
        }
    }

    #[test]
    fn test_rank_and_score_orders_agree_at_the_top() {
        let engine = engine();

        let by_rank = engine.query(&QueryState {
            sort_key: SortKey::RankAsc,
            ..Default::default()
        });
        assert_eq!(by_rank.rows[0].record.country, "Germany");
        assert_eq!(by_rank.rows[1].record.country, "Netherlands");

        let by_score = engine.query(&QueryState::default());
        assert_eq!(by_score.rows[0].record.country, "Germany");
        assert_eq!(by_score.rows[1].record.country, "Netherlands");
    }

    #[test]
    fn test_search_matches_country_substring() {
        let engine = engine();
        let result = engine.query(&QueryState {
            search_text: "many".to_string(),
            ..Default::default()
        });
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.rows[0].record.country, "Germany");
        assert_eq!(result.total_count, 27);
    }

    #[test]
    fn test_search_matches_english_usage() {
        let engine = engine();
        // "univ" appears only in "High (Univ)" usage values
        let result = engine.query(&QueryState {
            search_text: "univ".to_string(),
            ..Default::default()
        });
        assert!(result.matched_count >= 2);
        for row in &result.rows {
            assert!(row.record.english_usage.to_lowercase().contains("univ"));
        }
    }

    #[test]
    fn test_search_without_match_is_empty_not_error() {
        let engine = engine();
        let result = engine.query(&QueryState {
            search_text: "atlantis".to_string(),
            ..Default::default()
        });
        assert_eq!(result.matched_count, 0);
        assert!(result.rows.is_empty());
        assert_eq!(result.total_count, 27);
    }

    #[test]
    fn test_scholarship_filter_exact_match() {
        let engine = engine();
        let result = engine.query(&QueryState {
            scholarship_filter: "Very High".to_string(),
            ..Default::default()
        });
        let names: Vec<&str> = result
            .rows
            .iter()
            .map(|r| r.record.country.as_str())
            .collect();
        // Germany (score 92) sorts ahead of Italy (70) under the default key
        assert_eq!(names, vec!["Germany", "Italy"]);
    }

    #[test]
    fn test_spouse_filter() {
        let engine = engine();
        let result = engine.query(&QueryState {
            spouse_filter: "No".to_string(),
            ..Default::default()
        });
        assert!(result.matched_count > 0);
        for row in &result.rows {
            assert_eq!(row.record.spouse_work_allowed, "No");
        }
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let engine = engine();
        let result = engine.query(&QueryState {
            search_text: "a".to_string(),
            scholarship_filter: "Very High".to_string(),
            spouse_filter: "Yes".to_string(),
            ..Default::default()
        });
        for row in &result.rows {
            assert_eq!(row.record.masters_scholarship, "Very High");
            assert_eq!(row.record.spouse_work_allowed, "Yes");
        }
    }

    #[test]
    fn test_tuition_sort_ascending() {
        let engine = engine();
        let result = engine.query(&QueryState {
            sort_key: SortKey::TuitionAsc,
            ..Default::default()
        });
        for pair in result.rows.windows(2) {
            assert!(pair[0].tuition_mid <= pair[1].tuition_mid);
        }
        assert_eq!(result.rows[0].record.country, "Norway");
    }

    #[test]
    fn test_salary_sort_descending() {
        let engine = engine();
        let result = engine.query(&QueryState {
            sort_key: SortKey::SalaryDesc,
            ..Default::default()
        });
        for pair in result.rows.windows(2) {
            assert!(pair[0].salary_mid >= pair[1].salary_mid);
        }
        assert_eq!(result.rows[0].record.country, "United States");
    }

    #[test]
    fn test_leaderboard_picks() {
        let engine = engine();
        let board = engine.leaderboard();
        assert_eq!(board.top_score.record.country, "Germany");
        assert_eq!(board.top_visa.record.country, "Finland");
        assert_eq!(board.lowest_tuition.record.country, "Norway");
        assert_eq!(board.highest_salary.record.country, "United States");
    }

    #[test]
    fn test_leaderboard_ignores_filters() {
        let engine = engine();
        let before = engine.leaderboard().top_score.record.country.clone();
        // Querying with a narrow filter must not disturb the leaderboard
        let _ = engine.query(&QueryState {
            search_text: "poland".to_string(),
            ..Default::default()
        });
        assert_eq!(engine.leaderboard().top_score.record.country, before);
    }

    #[test]
    fn test_lookup_by_name() {
        let engine = engine();
        assert_eq!(engine.get("germany").unwrap().record.rank, 1);
        assert!(engine.get("Atlantis").is_none());
    }
}
