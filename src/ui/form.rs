//! Add-employee form

use crate::consts::ROUTE_EMPLOYEES;
use crate::error::Result;
use crate::i18n::{Language, Text};
use crate::model::{Employee, EmployeeDraft, FieldUpdate};
use crate::persistence::{EmployeeRepository, KeyValueStore};
use crate::platform::Platform;

/// New-employee form state
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    draft: EmployeeDraft,
    /// Form's own display language; the shell's switch does not reach it
    pub lang: Language,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// Back to defaults (Tech / Junior, everything else empty)
    pub fn reset(&mut self) {
        self.draft = EmployeeDraft::default();
    }

    /// Validate, append to the persisted collection, acknowledge and go back to the list.
    ///
    /// A validation or load failure keeps the draft. Once an id has been
    /// minted the draft is discarded whether or not the write succeeds.
    pub fn submit<S: KeyValueStore, P: Platform>(
        &mut self,
        repo: &EmployeeRepository<S>,
        platform: &P,
    ) -> Result<Employee> {
        self.draft.validate()?;

        let mut employees = repo.load_or_empty()?;
        let id = next_id(platform.now_ms(), &employees);
        let employee = std::mem::take(&mut self.draft).into_employee(id);

        employees.push(employee.clone());
        repo.save(&employees)?;
        log::info!("Employee {} added ({})", id, employee.full_name());

        platform.alert(Text::EmployeeAdded.translate(self.lang));
        platform.set_fragment(ROUTE_EMPLOYEES);
        Ok(employee)
    }
}

/// Timestamp id, bumped past every existing id
pub fn next_id(now_ms: u64, existing: &[Employee]) -> u64 {
    let max_existing = existing.iter().map(|e| e.id).max().unwrap_or(0);
    now_ms.max(max_existing.saturating_add(1))
}
