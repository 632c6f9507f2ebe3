//! Country Compare Core - query engine for the study-abroad comparison dashboard
//!
//! This crate provides a Rust implementation of the country comparison
//! dataset explorer with Python bindings via PyO3: normalize the editorial
//! dataset once, then recompute filtered/sorted views and leaderboard
//! summaries on every UI event.

use pyo3::prelude::*;

pub mod config;
pub mod dataset;
pub mod error;
pub mod explorer;
pub mod metrics;
pub mod query;

use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::query::QueryEngine;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

// ============================================================================
// Cached Dataset
// ============================================================================

/// Cached dataset engine shared by all explorer sessions
struct CachedDataset {
    engine: Arc<QueryEngine>,
}

/// Global cached dataset
static CACHED_DATASET: OnceCell<Arc<RwLock<CachedDataset>>> = OnceCell::new();

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the country dataset (call once at startup)
///
/// Normalizes the records and caches the engine in Rust memory, so explorer
/// sessions never re-parse the range strings.
///
/// # Arguments
/// * `records` - Optional list of country dicts/objects; omit to load the
///   embedded editorial dataset
///
/// # Returns
/// The number of countries loaded
#[pyfunction]
#[pyo3(signature = (records=None))]
fn init_dataset(records: Option<&Bound<'_, PyAny>>) -> PyResult<usize> {
    let raw = match records {
        Some(list) => config::deserialize_records(list)?,
        None => dataset::builtin_records().to_vec(),
    };

    let engine = QueryEngine::new(raw).map_err(PyErr::from)?;
    let count = engine.len();
    let cached = CachedDataset {
        engine: Arc::new(engine),
    };

    // If already initialized, update the dataset
    if let Some(existing) = CACHED_DATASET.get() {
        let mut guard = existing.write();
        *guard = cached;
    } else {
        let _ = CACHED_DATASET.set(Arc::new(RwLock::new(cached)));
    }

    Ok(count)
}

/// Check if the dataset is initialized
#[pyfunction]
fn is_dataset_initialized() -> bool {
    CACHED_DATASET.get().is_some()
}

/// Create an explorer session over the cached dataset
///
/// Each session owns its own search/sort/filter state; any number of
/// sessions share the one normalized collection.
///
/// # Raises
/// RuntimeError if `init_dataset` was not called first
#[pyfunction]
fn create_explorer() -> PyResult<Explorer> {
    let cached = CACHED_DATASET
        .get()
        .ok_or(ExplorerError::DatasetNotInitialized)?
        .clone();

    let engine = cached.read().engine.clone();
    Ok(Explorer::new(engine))
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn country_compare_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_dataset, m)?)?;
    m.add_function(wrap_pyfunction!(is_dataset_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(create_explorer, m)?)?;
    m.add_class::<Explorer>()?;
    Ok(())
}
