//! Explorer - Stateful session for the Python-Rust boundary
//!
//! This module provides the Explorer PyClass that owns one query state over
//! the shared dataset engine. The renderer on the Python side pulls a view
//! model after every mutation (or registers a callback and gets pushed one).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::sync::Arc;

use crate::dataset::NormalizedCountry;
use crate::query::{normalize_spouse_filter, Leaderboard, QueryEngine, QueryState, SortKey};

// ============================================================================
// View Model
// ============================================================================

/// Everything the renderer needs for one screen update.
///
/// `rows` is the filtered, ordered view; the leaderboard always covers the
/// full collection regardless of active filters.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub rows: Vec<NormalizedCountry>,
    pub matched_count: usize,
    pub total_count: usize,
    pub leaderboard: Leaderboard,
}

/// Pure view-model computation: same engine and state, same output.
pub fn compute_view_model(engine: &QueryEngine, state: &QueryState) -> ViewModel {
    let result = engine.query(state);
    ViewModel {
        rows: result.rows,
        matched_count: result.matched_count,
        total_count: result.total_count,
        leaderboard: engine.leaderboard().clone(),
    }
}

// ============================================================================
// Explorer PyClass
// ============================================================================

/// Explorer - one UI session over the shared dataset engine
///
/// Holds the dataset by `Arc`, so any number of independent explorer
/// instances can run against one initialized dataset. All mutators are
/// lenient the way the dashboard is: unknown sort keys fall back to the
/// default ordering, unknown spouse values fall back to "all".
#[pyclass]
pub struct Explorer {
    engine: Arc<QueryEngine>,
    state: QueryState,
    on_change: Option<Py<PyAny>>,
}

impl Explorer {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self {
            engine,
            state: QueryState::default(),
            on_change: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Direct state access for Rust callers (the PyO3 mutators below are the
    /// UI-facing surface)
    pub fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Recompute the view model for the current state
    pub fn view_model(&self) -> ViewModel {
        compute_view_model(&self.engine, &self.state)
    }

    /// Invoke the registered state-change callback, if any, with a fresh
    /// view model dict
    fn notify(&self, py: Python<'_>) -> PyResult<()> {
        if let Some(callback) = &self.on_change {
            let vm = self.view_model_dict(py)?;
            callback.call1(py, (vm,))?;
        }
        Ok(())
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl Explorer {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    /// Full collection size
    #[getter]
    fn total_count(&self) -> usize {
        self.engine.len()
    }

    /// Rows matching the current filters
    #[getter]
    fn matched_count(&self) -> usize {
        self.engine.query(&self.state).matched_count
    }

    /// Active sort key name
    #[getter]
    fn sort_key(&self) -> &'static str {
        self.state.sort_key.as_str()
    }

    /// Active search text
    #[getter]
    fn search_text(&self) -> String {
        self.state.search_text.clone()
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Set the free-text search (case-insensitive substring over country
    /// name and English usage)
    fn set_search(&mut self, py: Python<'_>, text: String) -> PyResult<()> {
        self.state.search_text = text;
        self.notify(py)
    }

    /// Set the sort key by name ("score", "rank", "visa", "tuition",
    /// "living", "salary"); unknown names fall back to the score ordering
    fn set_sort(&mut self, py: Python<'_>, key: &str) -> PyResult<()> {
        self.state.sort_key = SortKey::parse_or_default(key);
        self.notify(py)
    }

    /// Set the masters-scholarship filter ("all" clears it)
    fn set_scholarship_filter(&mut self, py: Python<'_>, value: String) -> PyResult<()> {
        self.state.scholarship_filter = value;
        self.notify(py)
    }

    /// Set the spouse-work filter ("Yes" / "No" / "all"; anything else
    /// falls back to "all")
    fn set_spouse_filter(&mut self, py: Python<'_>, value: &str) -> PyResult<()> {
        self.state.spouse_filter = normalize_spouse_filter(value);
        self.notify(py)
    }

    /// Register a callable invoked with the fresh view model after every
    /// mutation; pass None to unregister
    #[pyo3(signature = (callback=None))]
    fn on_state_change(&mut self, callback: Option<Py<PyAny>>) {
        self.on_change = callback;
    }

    // ------------------------------------------------------------------------
    // Data Access Methods
    // ------------------------------------------------------------------------

    /// Get the current view model as a dict:
    /// `{rows, matched_count, total_count, leaderboard}`
    fn get_view_model(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.view_model_dict(py)
    }

    /// Get one country row by name (case-insensitive), or None
    fn get_country(&self, py: Python<'_>, name: &str) -> PyResult<Py<PyAny>> {
        match self.engine.get(name) {
            Some(row) => Ok(row_to_dict(py, row)?.into()),
            None => Ok(py.None()),
        }
    }
}

// ============================================================================
// Private Helper Methods
// ============================================================================

impl Explorer {
    fn view_model_dict(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let vm = self.view_model();

        let dict = PyDict::new(py);

        let rows_list = PyList::empty(py);
        for row in &vm.rows {
            rows_list.append(row_to_dict(py, row)?)?;
        }
        dict.set_item("rows", rows_list)?;
        dict.set_item("matched_count", vm.matched_count)?;
        dict.set_item("total_count", vm.total_count)?;

        let board = PyDict::new(py);
        board.set_item("top_score", row_to_dict(py, &vm.leaderboard.top_score)?)?;
        board.set_item("top_visa", row_to_dict(py, &vm.leaderboard.top_visa)?)?;
        board.set_item("lowest_tuition", row_to_dict(py, &vm.leaderboard.lowest_tuition)?)?;
        board.set_item("highest_salary", row_to_dict(py, &vm.leaderboard.highest_salary)?)?;
        dict.set_item("leaderboard", board)?;

        Ok(dict.into())
    }
}

/// Convert a normalized row to a Python dict (raw fields plus derived
/// metrics)
fn row_to_dict<'py>(py: Python<'py>, row: &NormalizedCountry) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    let record = &row.record;

    dict.set_item("country", &record.country)?;
    dict.set_item("rank", record.rank)?;
    dict.set_item("total_score", record.total_score)?;
    dict.set_item("english_usage", &record.english_usage)?;
    dict.set_item("masters_scholarship", &record.masters_scholarship)?;
    dict.set_item("local_language_need", &record.local_language_need)?;
    dict.set_item("tax_level", &record.tax_level)?;
    dict.set_item("spouse_work_allowed", &record.spouse_work_allowed)?;
    dict.set_item("tuition_range", &record.tuition_range)?;
    dict.set_item("living_cost_range", &record.living_cost_range)?;
    dict.set_item("salary_range", &record.salary_range)?;
    dict.set_item("visa_success", &record.visa_success)?;
    dict.set_item("post_study_work_visa", &record.post_study_work_visa)?;
    dict.set_item("pr_timeline_years", &record.pr_timeline_years)?;
    dict.set_item("part_time_work_hours", &record.part_time_work_hours)?;

    dict.set_item("visa_rate", row.visa_rate)?;
    dict.set_item("tuition_mid", row.tuition_mid)?;
    dict.set_item("living_cost_mid", row.living_cost_mid)?;
    dict.set_item("salary_mid", row.salary_mid)?;
    dict.set_item("score_tier", row.score_tier.as_str())?;
    dict.set_item("visa_tier", row.visa_tier.as_str())?;

    Ok(dict)
}

// ============================================================================
// Unit Tests
// ============================================================================
