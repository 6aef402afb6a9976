//! UI components
//!
//! - `shell`: language + hash routing
//! - `list`: employee table, pagination, edit modal
//! - `form`: add-employee form
//! - `render`: HTML markup
//! - `app`: action dispatch over all of the above

pub mod app;
pub mod form;
pub mod list;
pub mod render;
pub mod shell;

pub use app::{Action, App};
pub use form::EmployeeForm;
pub use list::EmployeeList;
pub use shell::{Route, Shell};
