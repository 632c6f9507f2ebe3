//! Dataset ingestion
//!
//! Handles deserialization of the country dataset from Python lists of
//! dicts or objects. The embedded builtin dataset goes through serde
//! instead (see `dataset::builtin_records`).

mod country;

pub use country::*;

use crate::error::ExplorerError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// String field with both camelCase and snake_case spellings accepted,
/// degrading to "" when absent (trusted editorial data, lenient by policy)
fn get_string(obj: &Bound<'_, pyo3::PyAny>, camel: &str, snake: &str) -> String {
    get_attr_opt(obj, camel)
        .or_else(|| get_attr_opt(obj, snake))
        .and_then(|v| v.extract().ok())
        .unwrap_or_default()
}

/// Deserialize country records from a Python list
///
/// Expected format: `[{"country": ..., "rank": ..., "totalScore": ..., ...}]`
/// with either dicts or attribute-bearing objects as entries.
pub fn deserialize_records(
    list: &Bound<'_, pyo3::PyAny>,
) -> pyo3::PyResult<Vec<CountryRecord>> {
    let list: Bound<'_, PyList> = list.extract().map_err(|_| {
        pyo3::PyErr::from(ExplorerError::DeserializationError(
            "records must be a list".to_string(),
        ))
    })?;

    let mut records = Vec::with_capacity(list.len());
    for item in list.iter() {
        records.push(extract_record(&item)?);
    }
    Ok(records)
}

fn extract_record(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<CountryRecord> {
    let country: String = get_attr(obj, "country")?.extract()?;

    // Support both "totalScore" and "total_score" field names
    let total_score: i32 = get_attr_opt(obj, "totalScore")
        .or_else(|| get_attr_opt(obj, "total_score"))
        .and_then(|v| v.extract().ok())
        .unwrap_or(0);
    let rank: i32 = get_attr_opt(obj, "rank")
        .and_then(|v| v.extract().ok())
        .unwrap_or(0);

    Ok(CountryRecord {
        country,
        rank,
        total_score,
        english_usage: get_string(obj, "englishUsage", "english_usage"),
        masters_scholarship: get_string(obj, "mastersScholarship", "masters_scholarship"),
        local_language_need: get_string(obj, "localLanguageNeed", "local_language_need"),
        tax_level: get_string(obj, "taxLevel", "tax_level"),
        spouse_work_allowed: get_string(obj, "spouseWorkAllowed", "spouse_work_allowed"),
        tuition_range: get_string(obj, "tuitionRange", "tuition_range"),
        living_cost_range: get_string(obj, "livingCostRange", "living_cost_range"),
        salary_range: get_string(obj, "salaryRange", "salary_range"),
        visa_success: get_string(obj, "visaSuccess", "visa_success"),
        post_study_work_visa: get_string(obj, "postStudyWorkVisa", "post_study_work_visa"),
        pr_timeline_years: get_string(obj, "prTimelineYears", "pr_timeline_years"),
        part_time_work_hours: get_string(obj, "partTimeWorkHours", "part_time_work_hours"),
    })
}
