//! Employee record types
//!
//! Closed enumerations are checked both when parsed from form input and
//! when deserialized from storage.

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

/// Department an employee belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Department {
    #[default]
    Tech,
    Analytics,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Tech, Department::Analytics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Tech => "Tech",
            Department::Analytics => "Analytics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Tech" => Some(Department::Tech),
            "Analytics" => Some(Department::Analytics),
            _ => None,
        }
    }
}

/// Seniority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Junior" => Some(Position::Junior),
            "Medior" => Some(Position::Medior),
            "Senior" => Some(Position::Senior),
            _ => None,
        }
    }
}

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique, assigned at creation, never edited
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date_of_birth: String,
    /// ISO date (`YYYY-MM-DD`)
    pub employment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    /// Merge a single field; `id` is never touched
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(v) => self.first_name = v,
            FieldUpdate::LastName(v) => self.last_name = v,
            FieldUpdate::DateOfBirth(v) => self.date_of_birth = v,
            FieldUpdate::EmploymentDate(v) => self.employment_date = v,
            FieldUpdate::Phone(v) => self.phone = non_empty(v),
            FieldUpdate::Email(v) => self.email = non_empty(v),
            FieldUpdate::Department(v) => self.department = v,
            FieldUpdate::Position(v) => self.position = v,
        }
    }

    /// Same required-field rule the add form enforces
    pub fn validate(&self) -> Result<()> {
        check_required(
            &self.first_name,
            &self.last_name,
            &self.date_of_birth,
            &self.employment_date,
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn check_required(
    first_name: &str,
    last_name: &str,
    date_of_birth: &str,
    employment_date: &str,
) -> Result<()> {
    let required = [
        ("firstName", first_name),
        ("lastName", last_name),
        ("dateOfBirth", date_of_birth),
        ("employmentDate", employment_date),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(PortalError::MissingField { field });
        }
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Single-field change to a draft, validated against the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    DateOfBirth(String),
    EmploymentDate(String),
    Phone(String),
    Email(String),
    Department(Department),
    Position(Position),
}

impl FieldUpdate {
    /// Build an update from a form control's `name` and `value`
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let value = value.to_string();
        let update = match name {
            "firstName" => FieldUpdate::FirstName(value),
            "lastName" => FieldUpdate::LastName(value),
            "dateOfBirth" => FieldUpdate::DateOfBirth(value),
            "employmentDate" => FieldUpdate::EmploymentDate(value),
            "phone" => FieldUpdate::Phone(value),
            "email" => FieldUpdate::Email(value),
            "department" => FieldUpdate::Department(Department::from_str(&value).ok_or(
                PortalError::InvalidValue {
                    field: "department",
                    value,
                },
            )?),
            "position" => FieldUpdate::Position(Position::from_str(&value).ok_or(
                PortalError::InvalidValue {
                    field: "position",
                    value,
                },
            )?),
            other => return Err(PortalError::UnknownField(other.to_string())),
        };
        Ok(update)
    }
}

/// New-employee draft held by the add form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub employment_date: String,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl EmployeeDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(v) => self.first_name = v,
            FieldUpdate::LastName(v) => self.last_name = v,
            FieldUpdate::DateOfBirth(v) => self.date_of_birth = v,
            FieldUpdate::EmploymentDate(v) => self.employment_date = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Department(v) => self.department = v,
            FieldUpdate::Position(v) => self.position = v,
        }
    }

    /// Required-field presence check (names, both dates)
    pub fn validate(&self) -> Result<()> {
        check_required(
            &self.first_name,
            &self.last_name,
            &self.date_of_birth,
            &self.employment_date,
        )
    }

    /// Turn the draft into a record with the given id
    pub fn into_employee(self, id: u64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            employment_date: self.employment_date,
            phone: non_empty(self.phone),
            email: non_empty(self.email),
            department: self.department,
            position: self.position,
        }
    }
}
