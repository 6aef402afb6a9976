//! Shared fixtures for unit tests

use std::cell::{Cell, RefCell};

use crate::error::{PortalError, Result};
use crate::model::{Department, Employee, Position};
use crate::persistence::{KeyValueStore, MemoryStore};
use crate::platform::Platform;

/// Platform that answers confirms with a fixed choice and records every call
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    pub confirm_answer: bool,
    pub now: Cell<u64>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub fragments: RefCell<Vec<String>>,
}

impl ScriptedPlatform {
    pub fn confirming() -> Self {
        Self {
            confirm_answer: true,
            now: Cell::new(1_700_000_000_000),
            ..Default::default()
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::confirming()
        }
    }

    pub fn at(self, now: u64) -> Self {
        self.now.set(now);
        self
    }
}

impl Platform for ScriptedPlatform {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn set_fragment(&self, fragment: &str) {
        self.fragments.borrow_mut().push(fragment.to_string());
    }
}

/// `n` employees with ids `1..=n`
pub fn sample_employees(n: usize) -> Vec<Employee> {
    (1..=n as u64)
        .map(|id| Employee {
            id,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            date_of_birth: "1990-01-01".to_string(),
            employment_date: "2020-01-01".to_string(),
            phone: (id % 2 == 0).then(|| format!("555-{:04}", id)),
            email: Some(format!("user{}@example.com", id)),
            department: if id % 3 == 0 {
                Department::Analytics
            } else {
                Department::Tech
            },
            position: Position::ALL[(id % 3) as usize],
        })
        .collect()
}

/// Store that serves reads from an inner `MemoryStore` and rejects every write
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(PortalError::Storage("quota exceeded".to_string()))
    }
}
