//! Error types for the country compare core engine

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the country compare core engine
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Dataset not initialized")]
    DatasetNotInitialized,

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Duplicate country: {0}")]
    DuplicateCountry(String),

    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<ExplorerError> for PyErr {
    fn from(err: ExplorerError) -> PyErr {
        match err {
            ExplorerError::DatasetNotInitialized => {
                PyRuntimeError::new_err("Dataset not initialized. Call init_dataset() first.")
            }
            ExplorerError::EmptyDataset => PyValueError::new_err("Empty dataset"),
            ExplorerError::DuplicateCountry(name) => {
                PyValueError::new_err(format!("Duplicate country: {}", name))
            }
            ExplorerError::CountryNotFound(name) => {
                PyKeyError::new_err(format!("Country not found: {}", name))
            }
            ExplorerError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the country compare core engine
pub type Result<T> = std::result::Result<T, ExplorerError>;
