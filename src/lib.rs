//! Employee Portal - browser employee records manager
//!
//! Core modules:
//! - `model`: Employee record, closed enums, field updates
//! - `persistence`: Full-collection JSON storage with seed fallback
//! - `platform`: Browser/native platform abstraction
//! - `ui`: Shell, list, form components and rendering
//! - `i18n`: EN/TR display strings
//! - `settings`: Portal configuration

pub mod error;
pub mod i18n;
pub mod model;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use error::{PortalError, Result};
pub use model::{Department, Employee, EmployeeDraft, FieldUpdate, Position};
pub use settings::AppConfig;

/// Portal configuration constants
pub mod consts {
    /// LocalStorage key for the employee array
    pub const DEFAULT_STORAGE_KEY: &str = "employees";
    /// Static seed document
    pub const DEFAULT_SEED_URL: &str = "/employees.json";
    /// Rows per list page
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Routes
    pub const ROUTE_EMPLOYEES: &str = "#/employees";
    pub const ROUTE_ADD: &str = "#/add";
}
