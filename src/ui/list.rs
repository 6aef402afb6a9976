//! Employee list: collection owner, pagination and edit modal
//!
//! Every mutating operation writes the full collection through the
//! repository first and only then updates memory, so the in-memory
//! collection always mirrors the stored one.

use crate::error::{PortalError, Result};
use crate::i18n::{Language, Text};
use crate::model::{Employee, FieldUpdate};
use crate::persistence::{EmployeeRepository, KeyValueStore};
use crate::platform::Platform;

/// Employee table component state
#[derive(Debug, Clone)]
pub struct EmployeeList {
    employees: Vec<Employee>,
    /// 1-based
    current_page: usize,
    page_size: usize,
    /// Edit modal draft; the modal is open while this is `Some`
    edit_draft: Option<Employee>,
    pub lang: Language,
}

impl EmployeeList {
    pub fn new(employees: Vec<Employee>, page_size: usize) -> Self {
        Self {
            employees,
            current_page: 1,
            page_size: page_size.max(1),
            edit_draft: None,
            lang: Language::default(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_modal_open(&self) -> bool {
        self.edit_draft.is_some()
    }

    pub fn edit_draft(&self) -> Option<&Employee> {
        self.edit_draft.as_ref()
    }

    /// Replace the collection with the persisted one (on mount)
    pub fn reload<S: KeyValueStore>(&mut self, repo: &EmployeeRepository<S>) -> Result<()> {
        self.employees = repo.load_or_empty()?;
        self.current_page = 1;
        self.edit_draft = None;
        Ok(())
    }

    /// Set the collection directly (after the initial seed load)
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.clamp_page();
    }

    /// Number of pages (0 for an empty collection)
    pub fn page_count(&self) -> usize {
        self.employees.len().div_ceil(self.page_size)
    }

    /// Records on a 1-based page; empty for page 0 or past the end
    pub fn view(&self, page: usize) -> &[Employee] {
        if page == 0 {
            return &[];
        }
        let len = self.employees.len();
        let start = ((page - 1).saturating_mul(self.page_size)).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        &self.employees[start..end]
    }

    pub fn current_page_view(&self) -> &[Employee] {
        self.view(self.current_page)
    }

    /// Select a page, rejecting pages outside `1..=page_count`
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        let pages = self.page_count();
        if page == 0 || page > pages {
            return Err(PortalError::PageOutOfRange { page, pages });
        }
        self.current_page = page;
        Ok(())
    }

    /// Copy a record into the draft and open the modal
    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let employee = self
            .employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(PortalError::EmployeeNotFound { id })?;
        self.edit_draft = Some(employee.clone());
        Ok(())
    }

    /// Merge one field into the draft (ignored while the modal is closed)
    pub fn update_draft_field(&mut self, update: FieldUpdate) {
        if let Some(draft) = self.edit_draft.as_mut() {
            draft.apply(update);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_draft = None;
    }

    /// Write the draft over the record with the same id, persist, close the modal.
    ///
    /// Missing required fields, an unknown id or a failed write leave both
    /// the collection and the modal untouched.
    pub fn commit_edit<S: KeyValueStore>(&mut self, repo: &EmployeeRepository<S>) -> Result<()> {
        let Some(draft) = self.edit_draft.as_ref() else {
            return Ok(());
        };
        draft.validate()?;
        let index = self
            .employees
            .iter()
            .position(|e| e.id == draft.id)
            .ok_or(PortalError::EmployeeNotFound { id: draft.id })?;

        let mut updated = self.employees.clone();
        updated[index] = draft.clone();
        repo.save(&updated)?;

        self.employees = updated;
        if let Some(draft) = self.edit_draft.take() {
            log::info!("Employee {} updated", draft.id);
        }
        Ok(())
    }

    /// Delete after confirmation. Returns `false` if the user declined.
    ///
    /// The collection only changes once the write has succeeded.
    pub fn delete<S: KeyValueStore, P: Platform>(
        &mut self,
        id: u64,
        repo: &EmployeeRepository<S>,
        platform: &P,
    ) -> Result<bool> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(PortalError::EmployeeNotFound { id })?;

        if !platform.confirm(Text::ConfirmDelete.translate(self.lang)) {
            log::debug!("Delete of employee {} declined", id);
            return Ok(false);
        }

        let mut remaining = self.employees.clone();
        remaining.remove(index);
        repo.save(&remaining)?;

        self.employees = remaining;
        self.clamp_page();
        log::info!("Employee {} deleted", id);
        Ok(true)
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.min(self.page_count()).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Department;
    use crate::persistence::MemoryStore;
    use crate::test_support::{ReadOnlyStore, ScriptedPlatform, sample_employees};
    use proptest::prelude::*;

    fn list_with(n: usize) -> EmployeeList {
        EmployeeList::new(sample_employees(n), 10)
    }

    #[test]
    fn test_view_slices_pages() {
        let list = list_with(23);
        assert_eq!(list.page_count(), 3);
        assert_eq!(list.view(1).len(), 10);
        assert_eq!(list.view(3).len(), 3);
        assert_eq!(list.view(3)[0].id, 21);
        assert!(list.view(4).is_empty());
        assert!(list.view(0).is_empty());
    }

    #[test]
    fn test_set_page_rejects_overflow() {
        let mut list = list_with(12);
        list.set_page(2).unwrap();
        assert_eq!(list.current_page(), 2);

        assert!(matches!(
            list.set_page(3),
            Err(PortalError::PageOutOfRange { page: 3, pages: 2 })
        ));
        assert!(list.set_page(0).is_err());
        assert_eq!(list.current_page(), 2);
    }

    #[test]
    fn test_edit_changes_only_target() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let mut list = list_with(8);
        repo.save(list.employees()).unwrap();
        let before = list.employees().to_vec();

        list.open_edit(5).unwrap();
        assert!(list.is_modal_open());
        list.update_draft_field(FieldUpdate::Department(Department::Analytics));
        list.commit_edit(&repo).unwrap();
        assert!(!list.is_modal_open());

        let after = repo.load().unwrap().unwrap();
        for (old, new) in before.iter().zip(&after) {
            if old.id == 5 {
                assert_eq!(new.department, Department::Analytics);
                let mut expected = old.clone();
                expected.department = Department::Analytics;
                assert_eq!(*new, expected);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_commit_with_vanished_id_is_error() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let mut list = list_with(3);

        list.open_edit(2).unwrap();
        list.employees.retain(|e| e.id != 2);
        let before = list.employees().to_vec();

        assert!(matches!(
            list.commit_edit(&repo),
            Err(PortalError::EmployeeNotFound { id: 2 })
        ));
        assert_eq!(list.employees(), &before[..]);
        assert!(list.is_modal_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_rejects_emptied_required_fields() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let mut list = list_with(3);
        repo.save(list.employees()).unwrap();

        list.open_edit(2).unwrap();
        list.update_draft_field(FieldUpdate::FirstName(String::new()));
        list.update_draft_field(FieldUpdate::DateOfBirth(String::new()));
        assert!(matches!(
            list.commit_edit(&repo),
            Err(PortalError::MissingField { field: "firstName" })
        ));
        assert!(list.is_modal_open());

        let persisted = repo.load().unwrap().unwrap();
        assert_eq!(persisted[1].first_name, "First2");
        assert_eq!(persisted[1].date_of_birth, "1990-01-01");
        assert_eq!(list.employees()[1].first_name, "First2");
    }

    #[test]
    fn test_failed_write_keeps_memory_in_sync() {
        let store = ReadOnlyStore::default();
        let repo = EmployeeRepository::new(&store, "employees");
        let platform = ScriptedPlatform::confirming();
        let mut list = list_with(3);
        let before = list.employees().to_vec();

        list.open_edit(1).unwrap();
        list.update_draft_field(FieldUpdate::FirstName("Changed".into()));
        assert!(matches!(list.commit_edit(&repo), Err(PortalError::Storage(_))));
        assert_eq!(list.employees(), &before[..]);
        assert!(list.is_modal_open());
        assert_eq!(list.edit_draft().unwrap().first_name, "Changed");

        list.cancel_edit();
        assert!(matches!(
            list.delete(3, &repo, &platform),
            Err(PortalError::Storage(_))
        ));
        assert_eq!(list.employees(), &before[..]);
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut list = list_with(3);
        list.open_edit(1).unwrap();
        list.update_draft_field(FieldUpdate::FirstName("Changed".into()));
        list.cancel_edit();
        assert!(!list.is_modal_open());
        assert_ne!(list.employees()[0].first_name, "Changed");
    }

    #[test]
    fn test_open_edit_unknown_id() {
        let mut list = list_with(3);
        assert!(matches!(
            list.open_edit(99),
            Err(PortalError::EmployeeNotFound { id: 99 })
        ));
        assert!(!list.is_modal_open());
    }

    #[test]
    fn test_delete_declined_is_noop() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let platform = ScriptedPlatform::declining();
        let mut list = list_with(4);

        assert!(!list.delete(2, &repo, &platform).unwrap());
        assert_eq!(list.employees().len(), 4);
        assert!(store.is_empty());
        assert_eq!(platform.confirms.borrow().len(), 1);
    }

    #[test]
    fn test_delete_clamps_current_page() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let platform = ScriptedPlatform::confirming();
        let mut list = list_with(11);
        list.set_page(2).unwrap();

        assert!(list.delete(11, &repo, &platform).unwrap());
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_delete_prompt_is_localized() {
        let store = MemoryStore::new();
        let repo = EmployeeRepository::new(&store, "employees");
        let platform = ScriptedPlatform::declining();
        let mut list = list_with(1);
        list.lang = Language::Tr;

        list.delete(1, &repo, &platform).unwrap();
        assert_eq!(
            platform.confirms.borrow()[0],
            "Bu çalışanı silmek istediğinize emin misiniz?"
        );
    }

    proptest! {
        #[test]
        fn prop_view_length_and_reconstruction(n in 0usize..60, page in 1usize..10) {
            let list = list_with(n);
            let expected = 10usize.min(n.saturating_sub((page - 1) * 10));
            prop_assert_eq!(list.view(page).len(), expected);

            let rebuilt: Vec<Employee> = (1..=list.page_count())
                .flat_map(|p| list.view(p).to_vec())
                .collect();
            prop_assert_eq!(rebuilt.as_slice(), list.employees());
        }

        #[test]
        fn prop_confirmed_delete_removes_exactly_one(n in 1usize..30, pick in 0usize..30) {
            let store = MemoryStore::new();
            let repo = EmployeeRepository::new(&store, "employees");
            let platform = ScriptedPlatform::confirming();
            let mut list = list_with(n);
            let id = list.employees()[pick % n].id;

            prop_assert!(list.delete(id, &repo, &platform).unwrap());
            let persisted = repo.load().unwrap().unwrap();
            prop_assert_eq!(persisted.len(), n - 1);
            prop_assert!(persisted.iter().all(|e| e.id != id));
        }
    }
}
