//! Error types shared by the store, components and platform glue.

use thiserror::Error;

/// Errors raised by portal operations.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Key-value store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted blob or seed document is not a valid employee array
    #[error("Failed to parse employee data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records in a stored or seeded collection share an id
    #[error("Duplicate employee id {id}")]
    DuplicateId { id: u64 },

    /// Seed resource could not be fetched
    #[error("Failed to fetch seed data from '{url}': {reason}")]
    SeedFetch { url: String, reason: String },

    /// Required form field left empty
    #[error("Required field '{field}' is empty")]
    MissingField { field: &'static str },

    /// Field name not part of the employee schema
    #[error("Unknown employee field '{0}'")]
    UnknownField(String),

    /// Value not accepted for a closed enumeration field
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: &'static str, value: String },

    /// No employee with the given id in the collection
    #[error("Employee {id} not found")]
    EmployeeNotFound { id: u64 },

    /// Requested page is outside `1..=pages`
    #[error("Page {page} out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },
}

pub type Result<T> = std::result::Result<T, PortalError>;
